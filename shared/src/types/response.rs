//! API error response type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unified error response body for API failures
///
/// `error` carries the machine-readable code the clients branch on;
/// `message` is a human-readable description and never contains internal
/// detail for 5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling (e.g. `EXPIRED_TOKEN`)
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
