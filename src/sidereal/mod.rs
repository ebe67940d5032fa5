//! Sidereal clock
//!
//! Greenwich mean sidereal time is modeled as a linear function of the day
//! count since J2000.0. Results are always folded into `[0, 24)` hours so that
//! downstream hour angles never accumulate whole turns.

use crate::constants::{DEGREES_PER_HOUR, GMST_AT_J2000_HOURS, GMST_HOURS_PER_DAY};
use crate::time::Timestamp;

/// Fold an hour value into `[0, 24)`
pub fn normalize_hours(hours: f64) -> f64 {
    let folded = hours.rem_euclid(24.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if folded >= 24.0 {
        0.0
    } else {
        folded
    }
}

/// Greenwich mean sidereal time in hours for a day count since J2000.0
pub fn greenwich_mean_sidereal_time_hours(epoch_days: f64) -> f64 {
    normalize_hours(GMST_AT_J2000_HOURS + GMST_HOURS_PER_DAY * epoch_days)
}

/// Local sidereal time in hours for a day count and an east-positive longitude in degrees
pub fn local_sidereal_time_from_epoch(epoch_days: f64, longitude_deg: f64) -> f64 {
    normalize_hours(
        GMST_AT_J2000_HOURS + GMST_HOURS_PER_DAY * epoch_days + longitude_deg / DEGREES_PER_HOUR,
    )
}

/// Local sidereal time in hours at the given instant and east-positive longitude
pub fn local_sidereal_time_hours(timestamp: &Timestamp, longitude_deg: f64) -> f64 {
    local_sidereal_time_from_epoch(timestamp.epoch_days(), longitude_deg)
}
