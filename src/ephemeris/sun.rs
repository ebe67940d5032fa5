//! Low-precision solar position
//!
//! Mean longitude and mean anomaly grow linearly with the day count; a two
//! term equation of center gives the ecliptic longitude, which is rotated
//! into the equator by a slowly decreasing obliquity. Good to about 0.01°
//! over the twentieth and twenty-first centuries.

use super::Ecliptic;
use crate::coordinates::Equatorial;

/// Mean obliquity of the ecliptic in degrees for a day count since J2000.0
pub fn mean_obliquity_degrees(epoch_days: f64) -> f64 {
    23.439 - 0.000_000_4 * epoch_days
}

/// Geocentric ecliptic position of the Sun; the latitude is always zero
pub fn sun_ecliptic(epoch_days: f64) -> Ecliptic {
    let mean_longitude = 280.460 + 0.985_647_4 * epoch_days;
    let mean_anomaly = (357.528 + 0.985_600_3 * epoch_days).to_radians();

    let longitude = mean_longitude
        + 1.915 * mean_anomaly.sin()
        + 0.020 * (2.0 * mean_anomaly).sin();

    Ecliptic::new(longitude, 0.0)
}

/// Apparent equatorial position of the Sun for a day count since J2000.0
pub fn sun_position(epoch_days: f64) -> Equatorial {
    let lambda = sun_ecliptic(epoch_days).longitude.to_radians();
    let epsilon = mean_obliquity_degrees(epoch_days).to_radians();

    let ra = (epsilon.cos() * lambda.sin()).atan2(lambda.cos());
    let dec = (epsilon.sin() * lambda.sin()).asin();

    Equatorial::from_radians(ra, dec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sun_at_j2000() {
        let sun = sun_position(0.0);
        assert_abs_diff_eq!(sun.ra_hours, 18.752389, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.dec_degrees, -23.033429, epsilon = 1e-5);
    }

    #[test]
    fn test_sun_one_julian_year_later() {
        let sun = sun_position(8766.0);
        assert_abs_diff_eq!(sun.ra_hours, 18.765176, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.dec_degrees, -23.016071, epsilon = 1e-5);
    }

    #[test]
    fn test_declination_bounded_by_obliquity() {
        for i in 0..730 {
            let d = i as f64 * 0.5;
            let sun = sun_position(d);
            assert!((0.0..24.0).contains(&sun.ra_hours));
            assert!(sun.dec_degrees.abs() <= mean_obliquity_degrees(d) + 1e-9);
        }
    }

    #[test]
    fn test_ecliptic_latitude_is_zero() {
        let ecl = sun_ecliptic(1234.5);
        assert_eq!(ecl.latitude, 0.0);
        assert!((0.0..360.0).contains(&ecl.longitude));
    }

    #[test]
    fn test_obliquity_decreases() {
        assert_abs_diff_eq!(mean_obliquity_degrees(0.0), 23.439, epsilon = 1e-12);
        assert!(mean_obliquity_degrees(36_525.0) < mean_obliquity_degrees(0.0));
    }
}
