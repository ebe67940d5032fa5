//! Sky-map projection
//!
//! The visible hemisphere is drawn as a disc: the zenith sits at the center
//! of the viewport and the horizon on a circle filling 95% of the shorter
//! side. Altitude maps linearly to distance from the center, so bodies below
//! the horizon land outside the disc. Nothing is clipped here; callers use
//! [`ScreenPoint::visible`] to decide what to draw.

use crate::constants::HORIZON_DISC_FILL;
use crate::coordinates::Horizontal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for projection parameters
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),
}

/// Target surface of the projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    width: f64,
    height: f64,
    rotation: f64,
}

impl Viewport {
    /// Create a viewport of the given pixel size, rotated clockwise by `rotation` degrees
    pub fn new(width: f64, height: f64, rotation: f64) -> Result<Self, ProjectionError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ProjectionError::InvalidViewport(format!(
                "width must be positive, got {}",
                width
            )));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(ProjectionError::InvalidViewport(format!(
                "height must be positive, got {}",
                height
            )));
        }
        if !rotation.is_finite() {
            return Err(ProjectionError::InvalidViewport(format!(
                "rotation must be finite, got {}",
                rotation
            )));
        }
        Ok(Viewport {
            width,
            height,
            rotation,
        })
    }

    /// Same viewport turned to a different rotation
    pub fn with_rotation(self, rotation: f64) -> Result<Self, ProjectionError> {
        Self::new(self.width, self.height, rotation)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Rotation offset in degrees
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Pixel position of the zenith
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Radius of the horizon circle in pixels
    pub fn radius(&self) -> f64 {
        HORIZON_DISC_FILL * self.width.min(self.height) / 2.0
    }

    /// Project horizon coordinates to pixel coordinates
    ///
    /// With zero rotation north is at the top of the disc and east to the
    /// right of it when the y axis points down.
    pub fn project(&self, position: &Horizontal) -> (f64, f64) {
        let (cx, cy) = self.center();
        let r = (1.0 - position.altitude / 90.0) * self.radius();
        // Trigonometric angles start east; shift by a quarter turn to put north up
        let theta = (position.azimuth - 90.0 + self.rotation).to_radians();
        (cx + r * theta.cos(), cy + r * theta.sin())
    }
}

/// Project horizon coordinates onto a viewport
pub fn project(position: &Horizontal, viewport: &Viewport) -> (f64, f64) {
    viewport.project(position)
}

/// A body placed on the sky map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    /// Azimuth in degrees
    pub azimuth: f64,
    /// Altitude in degrees
    pub altitude: f64,
    /// True when the body is on or above the horizon
    pub visible: bool,
}

impl ScreenPoint {
    /// Place a horizon position on the viewport
    pub fn from_horizontal(position: &Horizontal, viewport: &Viewport) -> Self {
        let (x, y) = viewport.project(position);
        ScreenPoint {
            x,
            y,
            azimuth: position.azimuth,
            altitude: position.altitude,
            visible: position.is_above_horizon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn distance_from_center(viewport: &Viewport, point: (f64, f64)) -> f64 {
        let (cx, cy) = viewport.center();
        ((point.0 - cx).powi(2) + (point.1 - cy).powi(2)).sqrt()
    }

    #[test]
    fn test_zenith_projects_to_center() {
        for &rotation in &[0.0, 33.0, -270.0] {
            let viewport = Viewport::new(800.0, 600.0, rotation).unwrap();
            for &az in &[0.0, 91.0, 180.0, 359.0] {
                let (x, y) = project(&Horizontal::new(az, 90.0), &viewport);
                assert_abs_diff_eq!(x, 400.0, epsilon = 1e-9);
                assert_abs_diff_eq!(y, 300.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_horizon_projects_to_disc_edge() {
        let viewport = Viewport::new(800.0, 600.0, 17.0).unwrap();
        assert_abs_diff_eq!(viewport.radius(), 285.0, epsilon = 1e-12);
        for i in 0..36 {
            let point = viewport.project(&Horizontal::new(i as f64 * 10.0, 0.0));
            assert_abs_diff_eq!(distance_from_center(&viewport, point), 285.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_below_horizon_lands_outside() {
        let viewport = Viewport::new(500.0, 500.0, 0.0).unwrap();
        let point = viewport.project(&Horizontal::new(120.0, -30.0));
        let expected = (1.0 + 30.0 / 90.0) * viewport.radius();
        assert_abs_diff_eq!(distance_from_center(&viewport, point), expected, epsilon = 1e-9);
        assert!(expected > viewport.radius());
    }

    #[test]
    fn test_north_at_top_east_at_right() {
        let viewport = Viewport::new(200.0, 200.0, 0.0).unwrap();
        let r = viewport.radius();

        let (x, y) = viewport.project(&Horizontal::new(0.0, 0.0));
        assert_abs_diff_eq!(x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y, 100.0 - r, epsilon = 1e-9);

        let (x, y) = viewport.project(&Horizontal::new(90.0, 0.0));
        assert_abs_diff_eq!(x, 100.0 + r, epsilon = 1e-9);
        assert_abs_diff_eq!(y, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_turns_the_disc() {
        let viewport = Viewport::new(200.0, 200.0, 90.0).unwrap();
        // North rotated a quarter turn lands where east used to be
        let (x, y) = viewport.project(&Horizontal::new(0.0, 0.0));
        assert_abs_diff_eq!(x, 100.0 + viewport.radius(), epsilon = 1e-9);
        assert_abs_diff_eq!(y, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_screen_point_visibility() {
        let viewport = Viewport::new(300.0, 200.0, 0.0).unwrap();
        let up = ScreenPoint::from_horizontal(&Horizontal::new(45.0, 0.0), &viewport);
        assert!(up.visible);
        assert_abs_diff_eq!(up.azimuth, 45.0);
        let down = ScreenPoint::from_horizontal(&Horizontal::new(45.0, -0.5), &viewport);
        assert!(!down.visible);
        assert_abs_diff_eq!(down.altitude, -0.5);
    }

    #[test]
    fn test_invalid_viewports() {
        assert!(Viewport::new(0.0, 100.0, 0.0).is_err());
        assert!(Viewport::new(100.0, -1.0, 0.0).is_err());
        assert!(Viewport::new(f64::NAN, 100.0, 0.0).is_err());
        assert!(Viewport::new(100.0, 100.0, f64::INFINITY).is_err());
        let viewport = Viewport::new(100.0, 100.0, 0.0).unwrap();
        assert!(viewport.with_rotation(f64::NAN).is_err());
        assert_eq!(viewport.with_rotation(45.0).unwrap().rotation(), 45.0);
    }
}
