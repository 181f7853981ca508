//! Error types for message delivery.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS failures and errors while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the given URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for sending a message.
///
/// Only covers failures to talk to the service. A response in which the
/// service rejects the message is not an error; see
/// [`ApiResponse::is_success`](super::ApiResponse::is_success).
#[derive(Debug, Error)]
pub enum SendError {
    /// The preset's API URL could not be parsed.
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The preset's API URL uses a scheme other than http or https.
    #[error("Unsupported URL scheme '{0}': expected http or https")]
    UnsupportedScheme(String),

    /// The request failed at the transport level.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body is not the expected JSON object.
    #[error("Malformed response (HTTP {status}): {source}")]
    MalformedResponse {
        /// HTTP status of the response
        status: http::StatusCode,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
