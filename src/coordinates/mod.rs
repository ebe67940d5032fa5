//! Sky coordinate types and the observer's position on Earth
//!
//! Angles at this level are kept in the units observers quote them in:
//! right ascension in hours, everything else in degrees. Conversions to
//! radians happen inside the formulas that need them.

pub mod horizontal;

pub use horizontal::{equatorial_to_horizontal, hour_angle_degrees};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for out-of-range coordinates
#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("Latitude {0}° is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0}° is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),
}

/// Fold a degree value into `[0, 360)`
pub fn normalize_degrees(degrees: f64) -> f64 {
    let folded = degrees.rem_euclid(360.0);
    if folded >= 360.0 {
        0.0
    } else {
        folded
    }
}

/// Equatorial coordinates (RA/Dec)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    /// Right ascension in hours, `[0, 24)`
    pub ra_hours: f64,
    /// Declination in degrees, `[-90, 90]`
    pub dec_degrees: f64,
}

impl Equatorial {
    /// Create equatorial coordinates, folding the right ascension into `[0, 24)`
    pub fn new(ra_hours: f64, dec_degrees: f64) -> Self {
        Equatorial {
            ra_hours: crate::sidereal::normalize_hours(ra_hours),
            dec_degrees,
        }
    }

    /// Create equatorial coordinates from a right ascension and declination in radians
    pub fn from_radians(ra: f64, dec: f64) -> Self {
        Self::new(ra.to_degrees() / 15.0, dec.to_degrees())
    }

    /// Right ascension in radians
    pub fn ra_radians(&self) -> f64 {
        (self.ra_hours * 15.0).to_radians()
    }

    /// Declination in radians
    pub fn dec_radians(&self) -> f64 {
        self.dec_degrees.to_radians()
    }
}

/// Local horizon coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Horizontal {
    /// Azimuth in degrees clockwise from north, `[0, 360)`
    pub azimuth: f64,
    /// Altitude above the horizon in degrees, `[-90, 90]`
    pub altitude: f64,
}

impl Horizontal {
    pub fn new(azimuth: f64, altitude: f64) -> Self {
        Horizontal {
            azimuth: normalize_degrees(azimuth),
            altitude,
        }
    }

    /// True when the position is on or above the horizon
    pub fn is_above_horizon(&self) -> bool {
        self.altitude >= 0.0
    }
}

/// Geographic position of the observer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    latitude: f64,
    longitude: f64,
}

impl Observer {
    /// Create an observer from geodetic latitude and east-positive longitude in degrees
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() {
            return Err(CoordinateError::NonFinite("latitude"));
        }
        if !longitude.is_finite() {
            return Err(CoordinateError::NonFinite("longitude"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Observer {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, east positive
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_equatorial_conversions() {
        let coord = Equatorial::from_radians(PI, -PI / 4.0);
        assert_relative_eq!(coord.ra_hours, 12.0, epsilon = 1e-12);
        assert_relative_eq!(coord.dec_degrees, -45.0, epsilon = 1e-12);
        assert_relative_eq!(coord.ra_radians(), PI, epsilon = 1e-12);
        assert_relative_eq!(coord.dec_radians(), -PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equatorial_wraps_ra() {
        assert_relative_eq!(Equatorial::new(25.5, 0.0).ra_hours, 1.5, epsilon = 1e-12);
        assert_relative_eq!(Equatorial::new(-0.5, 0.0).ra_hours, 23.5, epsilon = 1e-12);
        assert_relative_eq!(
            Equatorial::from_radians(-PI / 2.0, 0.0).ra_hours,
            18.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_horizontal_visibility() {
        assert!(Horizontal::new(10.0, 0.0).is_above_horizon());
        assert!(Horizontal::new(10.0, 45.0).is_above_horizon());
        assert!(!Horizontal::new(10.0, -0.01).is_above_horizon());
        assert_relative_eq!(Horizontal::new(-90.0, 5.0).azimuth, 270.0);
    }

    #[test]
    fn test_observer_validation() {
        assert!(Observer::new(51.48, -0.0015).is_ok());
        assert!(Observer::new(90.0, 180.0).is_ok());
        assert!(Observer::new(-90.0, -180.0).is_ok());

        assert_eq!(
            Observer::new(90.5, 0.0),
            Err(CoordinateError::LatitudeOutOfRange(90.5))
        );
        assert_eq!(
            Observer::new(0.0, -181.0),
            Err(CoordinateError::LongitudeOutOfRange(-181.0))
        );
        assert_eq!(
            Observer::new(f64::NAN, 0.0),
            Err(CoordinateError::NonFinite("latitude"))
        );
        assert_eq!(
            Observer::new(0.0, f64::INFINITY),
            Err(CoordinateError::NonFinite("longitude"))
        );
    }

    #[test]
    fn test_normalize_degrees() {
        assert_relative_eq!(normalize_degrees(-30.0), 330.0);
        assert_relative_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-1e-15), 0.0);
    }
}
