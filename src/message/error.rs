//! Error types for message construction.

use thiserror::Error;

use crate::options::OptionError;

/// Error type for building a message from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// The message text is empty after joining and trimming.
    #[error("No message to send")]
    Empty,

    /// An override could not be applied (e.g. an invalid priority).
    #[error(transparent)]
    Option(#[from] OptionError),
}
