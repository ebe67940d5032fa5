//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Time constants
/// Milliseconds in a day
pub const DAY_MS: f64 = 86_400_000.0;
/// Minutes in a day
pub const DAY_MINUTES: f64 = 1_440.0;
/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Unix epoch (1970-01-01T00:00:00Z) as Julian date
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
/// Largest UTC offset accepted for a wall-clock timestamp, in minutes
pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

// Sidereal time
/// Greenwich mean sidereal time at J2000.0, in hours
pub const GMST_AT_J2000_HOURS: f64 = 18.697_374_558;
/// Sidereal hours elapsed per solar day
pub const GMST_HOURS_PER_DAY: f64 = 24.065_709_824_419_08;
/// Degrees of longitude per hour of time
pub const DEGREES_PER_HOUR: f64 = 15.0;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Obliquity of the ecliptic
/// Mean obliquity at J2000.0 used for planetary positions, in degrees
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_28;
/// Fixed obliquity used by the lunar theory, in degrees
pub const OBLIQUITY_LUNAR_DEG: f64 = 23.4397;

// Orbital elements
/// Catalog element sets must stay elliptical this many days either side of J2000.0
pub const ELEMENT_VALIDITY_DAYS: f64 = 10.0 * DAYS_PER_CENTURY;
/// Largest eccentricity the orbit model evaluates
pub const MAX_ECCENTRICITY: f64 = 0.999;

// Sky map
/// Fraction of the half-viewport covered by the horizon circle
pub const HORIZON_DISC_FILL: f64 = 0.95;
