//! Message API response.

use serde::{Deserialize, Serialize};

/// Parsed JSON response of the message API.
///
/// `{"status":1,"request":"..."}` on success,
/// `{"status":0,"errors":["..."],...}` when the message is rejected.
/// Any other fields are kept in [`extra`](Self::extra).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// `1` when the message was accepted
    #[serde(default)]
    pub status: i64,

    /// Request identifier assigned by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,

    /// Reasons the message was rejected
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,

    /// Remaining response fields, verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ApiResponse {
    /// Status value of an accepted message.
    pub const STATUS_OK: i64 = 1;

    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a JSON object of the expected shape.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Returns true if the service accepted the message.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == Self::STATUS_OK
    }
}
