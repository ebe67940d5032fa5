//! Where a body appears on the sky map
//!
//! The pipeline runs one way: the body's ephemeris gives equatorial
//! coordinates for the epoch, the sidereal clock and the observer's latitude
//! turn them into azimuth and altitude, and the viewport places those on the
//! disc. Nothing is cached between calls.

use crate::catalog::{Body, SkyCatalog};
use crate::coordinates::{equatorial_to_horizontal, Equatorial, Horizontal, Observer};
use crate::ephemeris::{moon_position, planet_position, sun_position};
use crate::projection::{ScreenPoint, Viewport};
use crate::sidereal::local_sidereal_time_from_epoch;
use crate::time::Timestamp;
use log::debug;

/// Geocentric equatorial coordinates of a body for a day count since J2000.0
///
/// Star coordinates are folded into range: right ascension into `[0, 24)` and
/// declination onto `[-90, 90]`.
pub fn equatorial_position(body: &Body, epoch_days: f64) -> Equatorial {
    match body {
        Body::Star(eq) => Equatorial::new(eq.ra_hours, eq.dec_degrees.clamp(-90.0, 90.0)),
        Body::Sun => sun_position(epoch_days),
        Body::Moon => moon_position(epoch_days),
        Body::Planet(elements) => planet_position(elements, epoch_days),
    }
}

/// Azimuth and altitude of a body for an observer at an instant
pub fn horizontal_position(body: &Body, timestamp: &Timestamp, observer: &Observer) -> Horizontal {
    let epoch_days = timestamp.epoch_days();
    let lst = local_sidereal_time_from_epoch(epoch_days, observer.longitude());
    equatorial_to_horizontal(
        &equatorial_position(body, epoch_days),
        lst,
        observer.latitude(),
    )
}

/// Place a body on the sky map
pub fn resolve_position(
    body: &Body,
    timestamp: &Timestamp,
    observer: &Observer,
    viewport: &Viewport,
) -> ScreenPoint {
    ScreenPoint::from_horizontal(&horizontal_position(body, timestamp, observer), viewport)
}

/// Place every body of a catalog on the sky map, in catalog order
pub fn resolve_catalog<'a>(
    catalog: &'a SkyCatalog,
    timestamp: &Timestamp,
    observer: &Observer,
    viewport: &Viewport,
) -> Vec<(&'a str, ScreenPoint)> {
    let epoch_days = timestamp.epoch_days();
    let lst = local_sidereal_time_from_epoch(epoch_days, observer.longitude());

    let points: Vec<_> = catalog
        .iter()
        .map(|entry| {
            let eq = equatorial_position(&entry.body, epoch_days);
            let hz = equatorial_to_horizontal(&eq, lst, observer.latitude());
            (entry.id.as_str(), ScreenPoint::from_horizontal(&hz, viewport))
        })
        .collect();

    debug!(
        "resolved {} bodies at {} ({} above the horizon)",
        points.len(),
        timestamp,
        points.iter().filter(|(_, p)| p.visible).count()
    );
    points
}
