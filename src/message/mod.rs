//! Notification message payload.
//!
//! A [`Message`] is an option record with the fields the service accepts
//! for a notification: the body text plus optional title, supplementary URL,
//! URL title, priority and timestamp.

mod error;
mod priority;
mod timestamp;


pub use error::MessageError;
pub use priority::{InvalidPriority, Priority};
pub use timestamp::{InvalidTimestamp, RawTimestamp, Timestamp};

use crate::options::{OptionDef, OptionError, OptionSet, Schema, Value, convert};

/// Field names of the [`Message`] record. These double as wire parameter names.
pub mod field {
    /// Message body (required).
    pub const MESSAGE: &str = "message";
    /// Message title.
    pub const TITLE: &str = "title";
    /// Supplementary URL.
    pub const URL: &str = "url";
    /// Title shown for the supplementary URL.
    pub const URL_TITLE: &str = "url_title";
    /// Priority level.
    pub const PRIORITY: &str = "priority";
    /// Message time, in epoch seconds.
    pub const TIMESTAMP: &str = "timestamp";
}

/// Schema marker for [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageSchema;

/// A notification message.
pub type Message = OptionSet<MessageSchema>;

static OPTIONS: [OptionDef; 6] = [
    OptionDef::new(field::MESSAGE).with_deserializer(convert::text),
    OptionDef::new(field::TITLE)
        .optional()
        .with_deserializer(convert::text),
    OptionDef::new(field::URL)
        .optional()
        .with_deserializer(convert::text),
    OptionDef::new(field::URL_TITLE)
        .optional()
        .with_deserializer(convert::text),
    OptionDef::new(field::PRIORITY)
        .optional()
        .with_default(default_priority)
        .implicit_default()
        .with_deserializer(deserialize_priority),
    OptionDef::new(field::TIMESTAMP)
        .optional()
        .with_deserializer(deserialize_timestamp),
];

impl Schema for MessageSchema {
    const KIND: &'static str = "Message";

    fn options() -> &'static [OptionDef] {
        &OPTIONS
    }
}

#[allow(clippy::unnecessary_wraps)] // signature fixed by `DefaultFn`
const fn default_priority() -> Option<Value> {
    Some(Value::Priority(Priority::DEFAULT))
}

fn deserialize_priority(field: &'static str, raw: Value) -> Result<Value, OptionError> {
    let priority = match &raw {
        Value::Priority(priority) => Ok(*priority),
        Value::Integer(code) => Priority::try_from(*code),
        Value::Text(text) => text.parse(),
        Value::Timestamp(_) => {
            return Err(OptionError::invalid(field, raw.to_string(), "not a priority"));
        }
    };
    priority
        .map(Value::Priority)
        .map_err(|e| OptionError::invalid(field, e.0.clone(), &e))
}

fn deserialize_timestamp(field: &'static str, raw: Value) -> Result<Value, OptionError> {
    let timestamp = match &raw {
        Value::Timestamp(timestamp) => Ok(*timestamp),
        Value::Integer(secs) => Ok(Timestamp::from_epoch(*secs)),
        Value::Text(text) => text.parse(),
        Value::Priority(_) => {
            return Err(OptionError::invalid(field, raw.to_string(), "not a timestamp"));
        }
    };
    timestamp
        .map(Value::Timestamp)
        .map_err(|e| OptionError::invalid(field, e.0.clone(), &e))
}

impl OptionSet<MessageSchema> {
    /// Creates a message with the given body and every other field at its default.
    ///
    /// # Errors
    ///
    /// Never fails for text input; the `Result` mirrors [`OptionSet::set`].
    pub fn with_body(body: impl Into<String>) -> Result<Self, OptionError> {
        let mut message = Self::new();
        message.set(field::MESSAGE, body.into())?;
        Ok(message)
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> Option<String> {
        self.text(field::MESSAGE)
    }

    /// Returns the message title.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.text(field::TITLE)
    }

    /// Returns the supplementary URL.
    #[must_use]
    pub fn url(&self) -> Option<String> {
        self.text(field::URL)
    }

    /// Returns the title of the supplementary URL.
    #[must_use]
    pub fn url_title(&self) -> Option<String> {
        self.text(field::URL_TITLE)
    }

    /// Returns the resolved priority.
    #[must_use]
    pub fn priority(&self) -> Priority {
        self.get(field::PRIORITY)
            .ok()
            .flatten()
            .and_then(|value| value.as_priority())
            .unwrap_or(Priority::DEFAULT)
    }

    /// Returns the message timestamp, if one was set.
    #[must_use]
    pub fn timestamp(&self) -> Option<Timestamp> {
        self.get(field::TIMESTAMP)
            .ok()
            .flatten()
            .and_then(|value| value.as_timestamp())
    }
}

/// Optional message fields supplied alongside the text.
///
/// `None` leaves the field untouched; it never resets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOverrides {
    /// Message title
    pub title: Option<String>,
    /// Supplementary URL
    pub url: Option<String>,
    /// Title of the supplementary URL
    pub url_title: Option<String>,
    /// Priority, as a name or an integer code
    pub priority: Option<String>,
    /// Timestamp, as epoch seconds
    pub timestamp: Option<String>,
}

impl MessageOverrides {
    fn pairs(&self) -> [(&'static str, Option<&str>); 5] {
        [
            (field::TITLE, self.title.as_deref()),
            (field::URL, self.url.as_deref()),
            (field::URL_TITLE, self.url_title.as_deref()),
            (field::PRIORITY, self.priority.as_deref()),
            (field::TIMESTAMP, self.timestamp.as_deref()),
        ]
    }
}

/// Builds a message from text tokens and optional field overrides.
///
/// Tokens are joined with single spaces and the result is trimmed.
///
/// # Errors
///
/// - [`MessageError::Empty`] if there is no text to send
/// - [`MessageError::Option`] if an override has an invalid value
pub fn build_message<T: AsRef<str>>(
    tokens: &[T],
    overrides: &MessageOverrides,
) -> Result<Message, MessageError> {
    let content = tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    let content = content.trim();
    if content.is_empty() {
        return Err(MessageError::Empty);
    }

    let mut message = Message::with_body(content)?;
    for (name, value) in overrides.pairs() {
        if let Some(value) = value {
            tracing::debug!("using {name}={value:?} from args");
            message.set(name, value)?;
        }
    }
    Ok(message)
}
