//! Session credential value object

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::DomainError;

/// Opaque bearer token identifying an authenticated user to the backend
///
/// The value is zeroized on drop and never printed by `Debug`.
pub struct SessionToken(SecretString);

impl SessionToken {
    /// Create a token from its raw value
    ///
    /// Surrounding whitespace is trimmed. Empty values and values containing
    /// inner whitespace or control characters are rejected, since they cannot
    /// be sent in an `Authorization` header.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidSessionToken(
                "token must not be empty".to_string(),
            ));
        }

        if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(DomainError::InvalidSessionToken(
                "token contains whitespace or control characters".to_string(),
            ));
        }

        Ok(Self(SecretString::from(trimmed.to_owned())))
    }

    /// Expose the raw token for sending or persisting
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SessionToken {
    fn clone(&self) -> Self {
        Self(SecretString::from(self.expose().to_owned()))
    }
}

impl PartialEq for SessionToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for SessionToken {}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

impl TryFrom<String> for SessionToken {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SessionToken {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
