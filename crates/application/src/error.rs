//! Application-level errors

use domain::{BackendError, DomainError};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Session expired and could not be refreshed; the user is logged out
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// No session credential was available for an authenticated call
    #[error("Session expired")]
    SessionExpired,

    /// No response was received (connection refused, DNS, timeout)
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Backend answered with a non-2xx status
    #[error("Backend error: {0}")]
    Backend(BackendError),

    /// Backend answered 2xx with a body that could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Local storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// The caller abandoned the request
    #[error("Request cancelled")]
    Cancelled,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether this error signals an expired or missing session
    ///
    /// Only these errors cause the gateway to refresh the credential.
    pub const fn is_authorization_failure(&self) -> bool {
        match self {
            Self::SessionExpired => true,
            Self::Backend(err) => err.is_unauthorized(),
            _ => false,
        }
    }

    /// Whether no response was received at all
    pub const fn is_transport_failure(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// The backend error payload, if the backend answered
    pub const fn backend_error(&self) -> Option<&BackendError> {
        match self {
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BackendError> for ApplicationError {
    fn from(err: BackendError) -> Self {
        Self::Backend(err)
    }
}
