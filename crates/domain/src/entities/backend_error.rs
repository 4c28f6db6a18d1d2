//! Normalized backend error payload

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error body returned by the backend on any non-2xx response
///
/// Callers receive this value unchanged; the client never reinterprets the
/// status code or message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendError {
    /// HTTP status code
    pub status_code: u16,
    /// Short error description
    pub error: String,
    /// Request path that produced the error
    pub path: String,
    /// Server timestamp (RFC 3339)
    pub timestamp: String,
}

impl BackendError {
    /// Create a backend error
    pub fn new(
        status_code: u16,
        error: impl Into<String>,
        path: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            status_code,
            error: error.into(),
            path: path.into(),
            timestamp: timestamp.into(),
        }
    }

    /// The session credential was missing, expired or rejected
    pub const fn is_unauthorized(&self) -> bool {
        self.status_code == 401
    }

    /// The user is authenticated but may not access the resource
    pub const fn is_forbidden(&self) -> bool {
        self.status_code == 403
    }

    /// The resource does not exist
    pub const fn is_not_found(&self) -> bool {
        self.status_code == 404
    }

    /// Status in the 5xx range
    pub const fn is_server_error(&self) -> bool {
        self.status_code >= 500 && self.status_code < 600
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.status_code, self.error, self.path)
    }
}
