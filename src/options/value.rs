//! In-memory option values.

use std::fmt;
use std::time::SystemTime;

use crate::message::{Priority, RawTimestamp, Timestamp};

/// The in-memory representation of a single option value.
///
/// Raw input (file contents, command-line strings) usually arrives as
/// [`Value::Text`]; deserializers turn it into the typed variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Plain text
    Text(String),
    /// Integer input that has not been given a meaning yet
    Integer(i64),
    /// Message priority level
    Priority(Priority),
    /// Point in time, in whole seconds since the Unix epoch
    Timestamp(Timestamp),
}

impl Value {
    /// Returns true for values that count as "no value" (empty text).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Returns the text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the priority, if this is a priority value.
    #[must_use]
    pub const fn as_priority(&self) -> Option<Priority> {
        match self {
            Self::Priority(priority) => Some(*priority),
            _ => None,
        }
    }

    /// Returns the timestamp, if this is a timestamp value.
    #[must_use]
    pub const fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Self::Timestamp(timestamp) => Some(*timestamp),
            _ => None,
        }
    }
}

/// Flat string form: text verbatim, priorities as their integer code,
/// timestamps as epoch seconds.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Priority(priority) => write!(f, "{}", priority.code()),
            Self::Timestamp(timestamp) => write!(f, "{}", timestamp.epoch_secs()),
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<Priority> for Value {
    fn from(priority: Priority) -> Self {
        Self::Priority(priority)
    }
}

impl From<Timestamp> for Value {
    fn from(timestamp: Timestamp) -> Self {
        Self::Timestamp(timestamp)
    }
}

impl From<RawTimestamp> for Value {
    fn from(raw: RawTimestamp) -> Self {
        Self::Timestamp(raw.into())
    }
}

impl From<SystemTime> for Value {
    fn from(time: SystemTime) -> Self {
        Self::Timestamp(time.into())
    }
}
