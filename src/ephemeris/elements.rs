//! Orbital element sets with first-order time dependence

use crate::constants::DAYS_PER_CENTURY;
use serde::{Deserialize, Serialize};

/// A quantity that drifts linearly with time: `base + rate_per_day * days`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearElement {
    /// Value at J2000.0
    pub base: f64,
    /// Change per day
    pub rate_per_day: f64,
}

impl LinearElement {
    pub const fn new(base: f64, rate_per_day: f64) -> Self {
        LinearElement { base, rate_per_day }
    }

    /// Build from a rate per Julian century, the form element tables are usually published in
    pub fn per_century(base: f64, rate_per_century: f64) -> Self {
        LinearElement {
            base,
            rate_per_day: rate_per_century / DAYS_PER_CENTURY,
        }
    }

    /// A value that does not change with time
    pub const fn fixed(base: f64) -> Self {
        LinearElement {
            base,
            rate_per_day: 0.0,
        }
    }

    /// Evaluate at a day count since J2000.0
    pub fn at(&self, epoch_days: f64) -> f64 {
        self.base + self.rate_per_day * epoch_days
    }
}

/// Keplerian elements of a heliocentric orbit
///
/// Distances are in AU, angles in degrees, all referred to the J2000.0
/// ecliptic and equinox.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub semi_major_axis: LinearElement,
    pub eccentricity: LinearElement,
    pub inclination: LinearElement,
    pub mean_longitude: LinearElement,
    pub longitude_of_perihelion: LinearElement,
    pub longitude_of_ascending_node: LinearElement,
}

/// Orbital elements evaluated at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementValues {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub mean_longitude: f64,
    pub longitude_of_perihelion: f64,
    pub longitude_of_ascending_node: f64,
}

impl ElementValues {
    /// Mean anomaly `L − ϖ` in radians, folded into `[0, 2π)`
    pub fn mean_anomaly(&self) -> f64 {
        (self.mean_longitude - self.longitude_of_perihelion)
            .to_radians()
            .rem_euclid(std::f64::consts::TAU)
    }

    /// Argument of perihelion `ϖ − Ω` in degrees
    pub fn argument_of_perihelion(&self) -> f64 {
        self.longitude_of_perihelion - self.longitude_of_ascending_node
    }
}

impl OrbitalElements {
    /// Elements from `(base, rate per century)` pairs in the order a, e, I, L, ϖ, Ω
    pub fn from_century_rates(table: [(f64, f64); 6]) -> Self {
        let [a, e, i, l, w, o] = table.map(|(base, rate)| LinearElement::per_century(base, rate));
        OrbitalElements {
            semi_major_axis: a,
            eccentricity: e,
            inclination: i,
            mean_longitude: l,
            longitude_of_perihelion: w,
            longitude_of_ascending_node: o,
        }
    }

    /// Evaluate every element at a day count since J2000.0
    pub fn at(&self, epoch_days: f64) -> ElementValues {
        ElementValues {
            semi_major_axis: self.semi_major_axis.at(epoch_days),
            eccentricity: self.eccentricity.at(epoch_days),
            inclination: self.inclination.at(epoch_days),
            mean_longitude: self.mean_longitude.at(epoch_days),
            longitude_of_perihelion: self.longitude_of_perihelion.at(epoch_days),
            longitude_of_ascending_node: self.longitude_of_ascending_node.at(epoch_days),
        }
    }
}
