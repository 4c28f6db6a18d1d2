//! Port for creating and ending sessions

use async_trait::async_trait;
use domain::{EmailAddress, SessionToken};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the auth service's login and logout operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Authenticate with email and password, returning a fresh credential
    async fn login(&self, email: &EmailAddress, password: &str)
    -> Result<SessionToken, ApplicationError>;

    /// Invalidate the given credential on the server
    async fn logout(&self, token: SessionToken) -> Result<(), ApplicationError>;
}
