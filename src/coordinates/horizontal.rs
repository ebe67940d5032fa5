//! Equatorial to horizontal coordinate transform

use super::{Equatorial, Horizontal};
use crate::constants::DEGREES_PER_HOUR;
use log::trace;

/// Below this value of `cos(lat)·cos(alt)` the azimuth is undefined
const AZIMUTH_DENOMINATOR_EPSILON: f64 = 1e-12;

/// Hour angle in degrees for a right ascension and a local sidereal time, both in hours
pub fn hour_angle_degrees(ra_hours: f64, lst_hours: f64) -> f64 {
    (lst_hours - ra_hours) * DEGREES_PER_HOUR
}

/// Convert equatorial coordinates to azimuth and altitude for an observer
///
/// `lst_hours` is the local sidereal time and `latitude_deg` the observer's
/// latitude. Azimuth is measured from north through east.
///
/// Positions at the observer's zenith or nadir, and any position seen from a
/// pole, have no defined azimuth; north (0°) is returned for them.
pub fn equatorial_to_horizontal(eq: &Equatorial, lst_hours: f64, latitude_deg: f64) -> Horizontal {
    let ha = hour_angle_degrees(eq.ra_hours, lst_hours).to_radians();
    let dec = eq.dec_degrees.to_radians();
    let lat = latitude_deg.to_radians();

    let sin_alt = (dec.sin() * lat.sin() + dec.cos() * lat.cos() * ha.cos()).clamp(-1.0, 1.0);
    let alt = sin_alt.asin();

    let denominator = lat.cos() * alt.cos();
    if denominator.abs() < AZIMUTH_DENOMINATOR_EPSILON {
        trace!(
            "azimuth undefined at latitude {:.6}°, altitude {:.6}°",
            latitude_deg,
            alt.to_degrees()
        );
        return Horizontal::new(0.0, alt.to_degrees());
    }

    let cos_az = ((dec.sin() - lat.sin() * sin_alt) / denominator).clamp(-1.0, 1.0);
    let raw = cos_az.acos().to_degrees();

    // acos only covers half the circle; west of the meridian the azimuth is mirrored
    let azimuth = if ha.sin() > 0.0 { 360.0 - raw } else { raw };

    Horizontal::new(azimuth, alt.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Unguarded acos result for the azimuth, for comparison with the tie-break
    fn raw_azimuth(eq: &Equatorial, lst_hours: f64, latitude_deg: f64) -> f64 {
        let ha = hour_angle_degrees(eq.ra_hours, lst_hours).to_radians();
        let dec = eq.dec_degrees.to_radians();
        let lat = latitude_deg.to_radians();
        let sin_alt = dec.sin() * lat.sin() + dec.cos() * lat.cos() * ha.cos();
        let alt = sin_alt.asin();
        ((dec.sin() - lat.sin() * sin_alt) / (lat.cos() * alt.cos()))
            .acos()
            .to_degrees()
    }

    #[test]
    fn test_hour_angle() {
        assert_abs_diff_eq!(hour_angle_degrees(3.0, 5.0), 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hour_angle_degrees(5.0, 3.0), -30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zenith_when_latitude_equals_declination() {
        for &lat in &[-67.5, -12.0, 0.0, 23.4, 51.5] {
            let eq = Equatorial::new(7.25, lat);
            let hz = equatorial_to_horizontal(&eq, 7.25, lat);
            // asin is ill-conditioned next to ±1
            assert_abs_diff_eq!(hz.altitude, 90.0, epsilon = 1e-5);
            assert!(hz.azimuth.is_finite());
        }
    }

    #[test]
    fn test_azimuth_west_of_meridian_is_mirrored() {
        let eq = Equatorial::new(0.0, 10.0);
        // HA = +30°, so sin(HA) > 0
        let hz = equatorial_to_horizontal(&eq, 2.0, 40.0);
        let raw = raw_azimuth(&eq, 2.0, 40.0);
        assert_abs_diff_eq!(hz.azimuth, 360.0 - raw, epsilon = 1e-9);
        assert!(hz.azimuth > 180.0);
    }

    #[test]
    fn test_azimuth_east_of_meridian_is_direct() {
        let eq = Equatorial::new(0.0, 10.0);
        // HA = -30°, so sin(HA) < 0
        let hz = equatorial_to_horizontal(&eq, 22.0, 40.0);
        let raw = raw_azimuth(&eq, 22.0, 40.0);
        assert_abs_diff_eq!(hz.azimuth, raw, epsilon = 1e-9);
        assert!(hz.azimuth < 180.0);
    }

    #[test]
    fn test_meridian_transit() {
        // South of the zenith at upper culmination for a northern observer
        let eq = Equatorial::new(12.0, 0.0);
        let hz = equatorial_to_horizontal(&eq, 12.0, 45.0);
        assert_abs_diff_eq!(hz.altitude, 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hz.azimuth, 180.0, epsilon = 1e-4);
    }

    #[test]
    fn test_pole_star_sits_north() {
        let polaris = Equatorial::new(2.53, 89.26);
        let hz = equatorial_to_horizontal(&polaris, 2.53, 52.0);
        assert_abs_diff_eq!(hz.altitude, 52.0 + (90.0 - 89.26), epsilon = 1e-6);
        assert!(hz.azimuth < 1e-4 || hz.azimuth > 360.0 - 1e-4);
    }

    #[test]
    fn test_observer_at_pole_has_no_nan() {
        let eq = Equatorial::new(5.0, 30.0);
        let hz = equatorial_to_horizontal(&eq, 13.0, 90.0);
        assert_abs_diff_eq!(hz.altitude, 30.0, epsilon = 1e-9);
        assert_eq!(hz.azimuth, 0.0);
    }

    #[test]
    fn test_nadir_has_no_nan() {
        let eq = Equatorial::new(0.0, -20.0);
        let hz = equatorial_to_horizontal(&eq, 12.0, 20.0);
        assert_abs_diff_eq!(hz.altitude, -90.0, epsilon = 1e-5);
        assert!(hz.azimuth.is_finite());
    }

    #[test]
    fn test_ranges() {
        for i in 0..48 {
            let lst = i as f64 * 0.5;
            let hz = equatorial_to_horizontal(&Equatorial::new(6.0, -35.0), lst, -33.9);
            assert!((0.0..360.0).contains(&hz.azimuth));
            assert!((-90.0..=90.0).contains(&hz.altitude));
        }
    }
}
