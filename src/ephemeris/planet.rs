//! Two-body Keplerian planet positions
//!
//! Each planet and the Earth move on fixed ellipses whose elements drift
//! linearly with time. The geocentric direction is the difference of the two
//! heliocentric positions, rotated from the ecliptic into the equator.

use super::elements::{LinearElement, OrbitalElements};
use crate::constants::{DAYS_PER_CENTURY, MAX_ECCENTRICITY, OBLIQUITY_J2000_DEG};
use crate::coordinates::Equatorial;
use log::trace;
use nalgebra::{Rotation3, Vector3};

/// Kepler iterations for the target planet
pub const PLANET_KEPLER_ITERATIONS: usize = 6;
/// Kepler iterations for the Earth
pub const EARTH_KEPLER_ITERATIONS: usize = 5;

/// Elements of the Earth-Moon barycenter orbit, J2000.0 ecliptic
pub const EARTH_ELEMENTS: OrbitalElements = OrbitalElements {
    semi_major_axis: LinearElement::new(1.000_002_61, 0.000_005_62 / DAYS_PER_CENTURY),
    eccentricity: LinearElement::new(0.016_711_23, -0.000_043_92 / DAYS_PER_CENTURY),
    inclination: LinearElement::fixed(0.0),
    mean_longitude: LinearElement::new(100.464_571_66, 35_999.372_449_81 / DAYS_PER_CENTURY),
    longitude_of_perihelion: LinearElement::new(102.937_681_93, 0.323_273_64 / DAYS_PER_CENTURY),
    longitude_of_ascending_node: LinearElement::fixed(0.0),
};

/// Solve Kepler's equation `E = M + e·sin(E)` by a fixed number of substitutions
///
/// Starts from `E = M`. The iteration count is part of the model: changing it
/// changes every downstream position.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64, iterations: usize) -> f64 {
    let mut eccentric_anomaly = mean_anomaly;
    for _ in 0..iterations {
        eccentric_anomaly = mean_anomaly + eccentricity * eccentric_anomaly.sin();
    }
    eccentric_anomaly
}

/// Heliocentric ecliptic position in AU after `iterations` Kepler substitutions
///
/// Element sets that drift out of the elliptic regime at `epoch_days` are
/// evaluated at the nearest closed orbit: eccentricity is held in
/// `[0, MAX_ECCENTRICITY]` and the semi-major axis is taken by magnitude.
pub fn heliocentric_ecliptic(
    elements: &OrbitalElements,
    epoch_days: f64,
    iterations: usize,
) -> Vector3<f64> {
    let el = elements.at(epoch_days);
    let a = el.semi_major_axis.abs();
    let e = el.eccentricity.clamp(0.0, MAX_ECCENTRICITY);
    if a != el.semi_major_axis || e != el.eccentricity {
        trace!(
            "elements leave the elliptic regime at day {:.1} (a = {}, e = {})",
            epoch_days,
            el.semi_major_axis,
            el.eccentricity
        );
    }

    let eccentric_anomaly = solve_kepler(el.mean_anomaly(), e, iterations);

    // Perihelion along +x in the orbital plane
    let in_plane = Vector3::new(
        a * (eccentric_anomaly.cos() - e),
        a * (1.0 - e * e).sqrt() * eccentric_anomaly.sin(),
        0.0,
    );

    let node = Rotation3::from_axis_angle(
        &Vector3::z_axis(),
        el.longitude_of_ascending_node.to_radians(),
    );
    let tilt = Rotation3::from_axis_angle(&Vector3::x_axis(), el.inclination.to_radians());
    let perihelion = Rotation3::from_axis_angle(
        &Vector3::z_axis(),
        el.argument_of_perihelion().to_radians(),
    );

    node * tilt * perihelion * in_plane
}

/// Heliocentric ecliptic position of the Earth in AU
pub fn earth_heliocentric(epoch_days: f64) -> Vector3<f64> {
    heliocentric_ecliptic(&EARTH_ELEMENTS, epoch_days, EARTH_KEPLER_ITERATIONS)
}

/// Geocentric ecliptic position of a planet in AU
pub fn geocentric_ecliptic(elements: &OrbitalElements, epoch_days: f64) -> Vector3<f64> {
    heliocentric_ecliptic(elements, epoch_days, PLANET_KEPLER_ITERATIONS)
        - earth_heliocentric(epoch_days)
}

/// Geocentric equatorial direction of a planet for a day count since J2000.0
pub fn planet_position(elements: &OrbitalElements, epoch_days: f64) -> Equatorial {
    let ecliptic = geocentric_ecliptic(elements, epoch_days);
    let to_equator =
        Rotation3::from_axis_angle(&Vector3::x_axis(), OBLIQUITY_J2000_DEG.to_radians());
    let eq = to_equator * ecliptic;

    let ra = eq.y.atan2(eq.x);
    // atan2 stays well conditioned close to the celestial poles
    let dec = eq.z.atan2((eq.x * eq.x + eq.y * eq.y).sqrt());

    Equatorial::from_radians(ra, dec)
}
