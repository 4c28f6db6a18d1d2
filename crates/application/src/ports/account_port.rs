//! Port for the authenticated user's account

use async_trait::async_trait;
use domain::{EmailAddress, SessionToken, User};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for account and email verification endpoints
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountPort: Send + Sync {
    /// Fetch the authenticated user
    async fn current_user(&self, token: Option<SessionToken>) -> Result<User, ApplicationError>;

    /// Confirm an email address with the token from the verification mail
    async fn verify_email(
        &self,
        token: Option<SessionToken>,
        verification_token: &str,
    ) -> Result<(), ApplicationError>;

    /// Send the verification mail again
    async fn resend_verification(
        &self,
        token: Option<SessionToken>,
        email: &EmailAddress,
    ) -> Result<(), ApplicationError>;
}
