//! Error types for configuration loading and preset resolution.

use std::path::PathBuf;

use thiserror::Error;

use crate::options::OptionError;

/// Error type for configuration operations.
///
/// Covers errors from file access, parsing, preset lookup and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse INI content.
    #[error("Failed to parse config {origin}: {source}")]
    Parse {
        /// Where the content came from (a path, or `<string>`)
        origin: String,
        /// Underlying parse error
        #[source]
        source: ini::ParseError,
    },

    /// The requested preset is not a section of the configuration.
    #[error("No preset '{0}'")]
    UnknownPreset(String),

    /// A named preset failed validation.
    #[error("Invalid preset '{name}': {source}")]
    InvalidPreset {
        /// Section name
        name: String,
        /// Validation failure
        #[source]
        source: OptionError,
    },

    /// Schema, validation or value error from the preset record.
    #[error(transparent)]
    Option(#[from] OptionError),
}

impl ConfigError {
    /// Returns true if the error is caused by missing required preset values.
    #[must_use]
    pub const fn is_missing_values(&self) -> bool {
        matches!(
            self,
            Self::Option(OptionError::MissingValues { .. })
                | Self::InvalidPreset {
                    source: OptionError::MissingValues { .. },
                    ..
                }
        )
    }
}
