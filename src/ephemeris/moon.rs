//! Truncated lunar theory
//!
//! One periodic term each in longitude and latitude on top of the mean
//! elements. The Moon strays up to five degrees from the ecliptic, so the
//! conversion to the equator keeps the latitude terms instead of assuming a
//! point on the ecliptic as the solar formula does.

use super::Ecliptic;
use crate::constants::OBLIQUITY_LUNAR_DEG;
use crate::coordinates::Equatorial;

/// Geocentric ecliptic position of the Moon for a day count since J2000.0
pub fn moon_ecliptic(epoch_days: f64) -> Ecliptic {
    let mean_longitude = 218.316 + 13.176_396 * epoch_days;
    let mean_anomaly = (134.963 + 13.064_993 * epoch_days).to_radians();
    let mean_distance = (93.272 + 13.229_350 * epoch_days).to_radians();

    let longitude = mean_longitude + 6.289 * mean_anomaly.sin();
    let latitude = 5.128 * mean_distance.sin();

    Ecliptic::new(longitude, latitude)
}

/// Geocentric equatorial position of the Moon for a day count since J2000.0
pub fn moon_position(epoch_days: f64) -> Equatorial {
    let ecl = moon_ecliptic(epoch_days);
    let l = ecl.longitude.to_radians();
    let b = ecl.latitude.to_radians();
    let e = OBLIQUITY_LUNAR_DEG.to_radians();

    let ra = (l.sin() * e.cos() - b.tan() * e.sin()).atan2(l.cos());
    let dec = (b.sin() * e.cos() + b.cos() * e.sin() * l.sin()).asin();

    Equatorial::from_radians(ra, dec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_moon_at_j2000() {
        let moon = moon_position(0.0);
        assert_abs_diff_eq!(moon.ra_hours, 14.793073, epsilon = 1e-5);
        assert_abs_diff_eq!(moon.dec_degrees, -10.786349, epsilon = 1e-5);
    }

    #[test]
    fn test_moon_one_julian_year_later() {
        let moon = moon_position(8766.0);
        assert_abs_diff_eq!(moon.ra_hours, 10.994450, epsilon = 1e-5);
        assert_abs_diff_eq!(moon.dec_degrees, 9.875461, epsilon = 1e-5);
    }

    #[test]
    fn test_latitude_amplitude() {
        for i in 0..400 {
            let ecl = moon_ecliptic(i as f64 * 0.37);
            assert!(ecl.latitude.abs() <= 5.128 + 1e-12);
        }
    }

    #[test]
    fn test_ranges_over_a_month() {
        for i in 0..(28 * 24) {
            let moon = moon_position(-500.0 + i as f64 / 24.0);
            assert!((0.0..24.0).contains(&moon.ra_hours));
            // Obliquity plus the maximum latitude
            assert!(moon.dec_degrees.abs() <= OBLIQUITY_LUNAR_DEG + 5.128 + 1e-9);
        }
    }

    #[test]
    fn test_moves_eastward() {
        // Roughly 13 degrees per day along the ecliptic
        let a = moon_ecliptic(100.0).longitude;
        let b = moon_ecliptic(101.0).longitude;
        let step = (b - a).rem_euclid(360.0);
        assert!(step > 10.0 && step < 16.0, "daily motion {}", step);
    }
}
