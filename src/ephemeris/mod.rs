//! Body ephemerides: Sun, Moon and planets
//!
//! Each ephemeris maps a day count since J2000.0 to geocentric equatorial
//! coordinates. Fixed stars need no ephemeris; their catalog coordinates are
//! used as they are.

pub mod elements;
pub mod moon;
pub mod planet;
pub mod sun;

pub use elements::{ElementValues, LinearElement, OrbitalElements};
pub use moon::moon_position;
pub use planet::{planet_position, solve_kepler, EARTH_ELEMENTS};
pub use sun::sun_position;

use crate::coordinates::normalize_degrees;

/// Geocentric ecliptic coordinates in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ecliptic {
    /// Ecliptic longitude, `[0, 360)`
    pub longitude: f64,
    /// Ecliptic latitude, `[-90, 90]`
    pub latitude: f64,
}

impl Ecliptic {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Ecliptic {
            longitude: normalize_degrees(longitude),
            latitude,
        }
    }
}
