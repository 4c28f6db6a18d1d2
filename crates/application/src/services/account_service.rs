//! Account accessors: profile and email verification

use std::sync::Arc;

use domain::{DomainError, EmailAddress, User};
use tracing::{info, instrument};

use super::SessionGateway;
use crate::error::ApplicationError;
use crate::ports::AccountPort;

/// Access to the authenticated user's account
pub struct AccountService {
    gateway: Arc<SessionGateway>,
    port: Arc<dyn AccountPort>,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService").finish_non_exhaustive()
    }
}

impl AccountService {
    /// Create a new account service
    #[must_use]
    pub fn new(gateway: Arc<SessionGateway>, port: Arc<dyn AccountPort>) -> Self {
        Self { gateway, port }
    }

    /// The user the current session belongs to
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User, ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.current_user(token))
            .await
    }

    /// Confirm the account's email with the token from the verification mail
    ///
    /// # Errors
    ///
    /// Rejects a blank verification token without calling the backend.
    #[instrument(skip(self, verification_token))]
    pub async fn verify_email(&self, verification_token: &str) -> Result<(), ApplicationError> {
        let verification_token = verification_token.trim();
        if verification_token.is_empty() {
            return Err(DomainError::ValidationError(
                "verification token must not be empty".to_string(),
            )
            .into());
        }

        self.gateway
            .execute_with_refresh(|token| self.port.verify_email(token, verification_token))
            .await?;
        info!("Email verified");
        Ok(())
    }

    /// Send the verification mail again
    #[instrument(skip(self), fields(email = %email))]
    pub async fn resend_verification(&self, email: &EmailAddress) -> Result<(), ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.resend_verification(token, email))
            .await
    }
}
