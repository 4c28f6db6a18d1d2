//! Backend client error types

use domain::BackendError;
use thiserror::Error;

/// Errors that can occur while talking to the backend or auth service
#[derive(Debug, Error)]
pub enum BackendClientError {
    /// No response was received (DNS, refused connection, reset)
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The service answered with a non-2xx status
    #[error("Backend returned {0}")]
    Backend(BackendError),

    /// A 2xx response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Client could not be built from its configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl BackendClientError {
    /// Returns true if no response was received at all
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Timeout { .. })
    }

    /// Returns true if the service rejected the credential
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        match self {
            Self::Backend(err) => err.is_unauthorized(),
            _ => false,
        }
    }

    /// The normalized error body, if the service answered
    #[must_use]
    pub const fn backend_error(&self) -> Option<&BackendError> {
        match self {
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}
