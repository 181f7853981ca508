//! Message priority levels.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Delivery priority of a message.
///
/// Each level has an integer code (sent on the wire) and a symbolic name
/// (accepted on the command line and in config files).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Priority {
    /// No notification at all (code -2)
    Lowest,
    /// Quiet notification (code -1)
    Low,
    /// Regular notification (code 0)
    #[default]
    Normal,
    /// Bypasses quiet hours (code 1)
    High,
    /// Repeats until acknowledged (code 2)
    Emergency,
}

/// Error returned when a value names no priority level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid priority '{0}': expected lowest, low, normal, high, emergency or -2..2")]
pub struct InvalidPriority(pub String);

impl Priority {
    /// Every level, highest first.
    pub const ALL: [Self; 5] = [
        Self::Emergency,
        Self::High,
        Self::Normal,
        Self::Low,
        Self::Lowest,
    ];

    /// Level used when a message does not set one.
    pub const DEFAULT: Self = Self::Normal;

    /// Returns the wire code of this level.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::Lowest => -2,
            Self::Low => -1,
            Self::Normal => 0,
            Self::High => 1,
            Self::Emergency => 2,
        }
    }

    /// Returns the symbolic name of this level.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lowest => "lowest",
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Emergency => "emergency",
        }
    }

    /// Looks up a level by wire code.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|p| i64::from(p.code()) == code)
    }

    /// Looks up a level by symbolic name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a symbolic name or an integer code.
impl FromStr for Priority {
    type Err = InvalidPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_name(s)
            .or_else(|| s.parse::<i64>().ok().and_then(Self::from_code))
            .ok_or_else(|| InvalidPriority(s.to_string()))
    }
}

impl TryFrom<i64> for Priority {
    type Error = InvalidPriority;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| InvalidPriority(code.to_string()))
    }
}
