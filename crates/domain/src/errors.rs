//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid email address format
    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(String),

    /// Identifier cannot be used as a path segment
    #[error("Invalid {kind} id: {value:?}")]
    InvalidIdentifier { kind: &'static str, value: String },

    /// Session token was empty or malformed
    #[error("Invalid session token: {0}")]
    InvalidSessionToken(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            value: value.into(),
        }
    }
}
