//! Error types for option records.

use thiserror::Error;

/// Error type for option record operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// A field name that is not part of the record's schema.
    #[error("{kind} got an unexpected field '{field}'")]
    UnknownField {
        /// Record type name
        kind: &'static str,
        /// The offending field name
        field: String,
    },

    /// One or more required fields resolved to an empty value.
    #[error("{kind} is missing required values: {}", fields.join(", "))]
    MissingValues {
        /// Record type name
        kind: &'static str,
        /// Every required field without a value, in schema order
        fields: Vec<&'static str>,
    },

    /// A raw value could not be converted to the field's typed form.
    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidValue {
        /// Name of the field
        field: &'static str,
        /// The raw value as given
        value: String,
        /// Reason for invalidity
        reason: String,
    },
}

impl OptionError {
    /// Creates an `InvalidValue` error for a field.
    #[must_use]
    pub fn invalid(field: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the names of missing fields, if this is a `MissingValues` error.
    #[must_use]
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Self::MissingValues { fields, .. } => fields,
            _ => &[],
        }
    }
}
