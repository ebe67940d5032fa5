//! Skydome: apparent positions of the Sun, Moon, planets and stars on a circular sky map
//!
//! This crate turns a body descriptor, an instant and an observer's location
//! into a point on a 2D disc representing the visible hemisphere. The
//! computation is a pure chain of low-precision models:
//!
//! timestamp → day count since J2000.0 → equatorial coordinates →
//! azimuth/altitude → pixel coordinates.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use skydome::{resolve_position, Body, Observer, Timestamp, Viewport};
//!
//! let time: Timestamp = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap().into();
//! let observer = Observer::new(0.0, 0.0)?;
//! let viewport = Viewport::new(800.0, 800.0, 0.0)?;
//!
//! let sun = resolve_position(&Body::Sun, &time, &observer, &viewport);
//! assert!(sun.visible);
//! # Ok::<(), skydome::SkydomeError>(())
//! ```

use thiserror::Error;

pub mod catalog;
pub mod constants;
pub mod coordinates;
pub mod ephemeris;
pub mod positions;
pub mod projection;
pub mod sidereal;
pub mod time;

// Re-export commonly used types
pub use catalog::{Body, CatalogBody, SkyCatalog};
pub use coordinates::{Equatorial, Horizontal, Observer};
pub use positions::{resolve_catalog, resolve_position};
pub use projection::{ScreenPoint, Viewport};
pub use time::Timestamp;

/// Main error type for the skydome library
#[derive(Debug, Error)]
pub enum SkydomeError {
    #[error("Time error: {0}")]
    Time(#[from] time::TimeError),

    #[error("Coordinate error: {0}")]
    Coordinate(#[from] coordinates::CoordinateError),

    #[error("Projection error: {0}")]
    Projection(#[from] projection::ProjectionError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
}

/// Result type for skydome operations
pub type Result<T> = std::result::Result<T, SkydomeError>;
