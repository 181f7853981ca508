//! Message timestamps.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use thiserror::Error;

/// A point in time, in whole seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(i64);

/// Timestamp input: either epoch seconds or an already-built instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawTimestamp {
    /// Seconds since the Unix epoch
    Epoch(i64),
    /// A system time instant; sub-second precision is dropped
    Instant(SystemTime),
}

/// Error returned when text is not a valid epoch timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp '{0}': expected seconds since the Unix epoch")]
pub struct InvalidTimestamp(pub String);

impl Timestamp {
    /// Creates a timestamp from seconds since the Unix epoch.
    #[must_use]
    pub const fn from_epoch(secs: i64) -> Self {
        Self(secs)
    }

    /// Returns the number of seconds since the Unix epoch.
    #[must_use]
    pub const fn epoch_secs(self) -> i64 {
        self.0
    }

    /// Converts a system time, truncating towards the epoch.
    #[must_use]
    pub fn from_system_time(time: SystemTime) -> Self {
        let secs = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_secs()).map_or(i64::MIN, |s| -s),
        };
        Self(secs)
    }

    /// Converts back to a system time, if representable on this platform.
    #[must_use]
    pub fn to_system_time(self) -> Option<SystemTime> {
        let offset = Duration::from_secs(self.0.unsigned_abs());
        if self.0 >= 0 {
            UNIX_EPOCH.checked_add(offset)
        } else {
            UNIX_EPOCH.checked_sub(offset)
        }
    }
}

impl From<RawTimestamp> for Timestamp {
    fn from(raw: RawTimestamp) -> Self {
        match raw {
            RawTimestamp::Epoch(secs) => Self::from_epoch(secs),
            RawTimestamp::Instant(time) => Self::from_system_time(time),
        }
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepts a plain run of decimal digits.
impl FromStr for Timestamp {
    type Err = InvalidTimestamp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidTimestamp(s.to_string()));
        }
        s.parse::<i64>()
            .map(Self::from_epoch)
            .map_err(|_| InvalidTimestamp(s.to_string()))
    }
}
