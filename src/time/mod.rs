//! Time module for the day-count epoch used by every downstream formula
//!
//! Sky positions are computed against a continuous count of days since the
//! J2000.0 reference instant. Callers usually hold a wall-clock reading in some
//! local zone, so a [`Timestamp`] carries the local reading together with the
//! UTC offset of the zone it was read in. Sidereal time depends on the true
//! UTC instant, which is recovered by removing that offset.

use crate::constants::{DAY_MINUTES, DAY_MS, J2000, MAX_UTC_OFFSET_MINUTES, UNIX_EPOCH_JD};
use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Utc};
use std::fmt;
use std::ops::Sub;
use thiserror::Error;

/// Error type for time operations
#[derive(Debug, Error, PartialEq)]
pub enum TimeError {
    #[error("UTC offset of {0} minutes is outside ±{max} minutes", max = MAX_UTC_OFFSET_MINUTES)]
    OffsetOutOfRange(i32),

    #[error("UTC offset of {0} seconds is not a whole number of minutes")]
    FractionalOffset(i32),

    #[error("Time out of range: {0}")]
    OutOfRange(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// A wall-clock reading together with the UTC offset of its zone
///
/// The offset is expressed as local time minus UTC, in minutes, so zones east
/// of Greenwich have positive offsets (UTC+02:00 is `120`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    /// Local wall-clock reading
    local: NaiveDateTime,
    /// Local minus UTC, in minutes
    utc_offset_minutes: i32,
}

impl Timestamp {
    /// Create a timestamp from a local reading and the zone's UTC offset
    pub fn new(local: NaiveDateTime, utc_offset_minutes: i32) -> Result<Self> {
        if utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(TimeError::OffsetOutOfRange(utc_offset_minutes));
        }
        Ok(Self {
            local,
            utc_offset_minutes,
        })
    }

    /// Create a timestamp from milliseconds of local time since 1970-01-01T00:00:00
    pub fn from_millis(local_millis: i64, utc_offset_minutes: i32) -> Result<Self> {
        let local = DateTime::from_timestamp_millis(local_millis)
            .ok_or_else(|| {
                TimeError::OutOfRange(format!("{} ms is not a representable instant", local_millis))
            })?
            .naive_utc();
        Self::new(local, utc_offset_minutes)
    }

    /// Timestamp for the current instant, expressed in UTC
    pub fn now() -> Self {
        Utc::now().into()
    }

    /// Local wall-clock reading
    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    /// UTC offset of the local reading, in minutes
    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }

    /// Milliseconds of the local reading since the Unix epoch
    pub fn local_millis(&self) -> i64 {
        self.local.and_utc().timestamp_millis()
    }

    /// The true UTC instant of this reading
    pub fn utc_datetime(&self) -> Result<DateTime<Utc>> {
        self.local
            .checked_sub_signed(Duration::minutes(self.utc_offset_minutes as i64))
            .map(|utc| utc.and_utc())
            .ok_or_else(|| TimeError::OutOfRange(format!("{} has no representable UTC instant", self)))
    }

    /// Shift the reading forward, keeping its zone; `None` past chrono's range
    pub fn checked_add(&self, duration: Duration) -> Option<Timestamp> {
        Some(Timestamp {
            local: self.local.checked_add_signed(duration)?,
            utc_offset_minutes: self.utc_offset_minutes,
        })
    }

    /// Shift the reading backward, keeping its zone; `None` past chrono's range
    pub fn checked_sub(&self, duration: Duration) -> Option<Timestamp> {
        Some(Timestamp {
            local: self.local.checked_sub_signed(duration)?,
            utc_offset_minutes: self.utc_offset_minutes,
        })
    }

    /// Julian date of the UTC instant
    pub fn julian_date(&self) -> f64 {
        julian_date_from_millis(self.local_millis(), self.utc_offset_minutes)
    }

    /// Days elapsed since J2000.0, including the fraction of the day
    pub fn epoch_days(&self) -> f64 {
        self.julian_date() - J2000
    }
}

/// Days since J2000.0 for a timestamp
pub fn epoch_days(timestamp: &Timestamp) -> f64 {
    timestamp.epoch_days()
}

/// Julian date from local milliseconds since the Unix epoch and the zone's UTC offset
pub fn julian_date_from_millis(local_millis: i64, utc_offset_minutes: i32) -> f64 {
    local_millis as f64 / DAY_MS - utc_offset_minutes as f64 / DAY_MINUTES + UNIX_EPOCH_JD
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.utc_offset_minutes < 0 { '-' } else { '+' };
        let offset = self.utc_offset_minutes.abs();
        write!(
            f,
            "{}{}{:02}:{:02}",
            self.local.format("%Y-%m-%dT%H:%M:%S%.3f"),
            sign,
            offset / 60,
            offset % 60
        )
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = f64;

    fn sub(self, other: Timestamp) -> Self::Output {
        // Difference in days between the two UTC instants
        self.julian_date() - other.julian_date()
    }
}

// Allow conversion from chrono datetimes

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp {
            local: dt.naive_utc(),
            utc_offset_minutes: 0,
        }
    }
}

impl TryFrom<DateTime<FixedOffset>> for Timestamp {
    type Error = TimeError;

    fn try_from(dt: DateTime<FixedOffset>) -> Result<Self> {
        let seconds = dt.offset().local_minus_utc();
        if seconds % 60 != 0 {
            return Err(TimeError::FractionalOffset(seconds));
        }
        Timestamp::new(dt.naive_local(), seconds / 60)
    }
}
