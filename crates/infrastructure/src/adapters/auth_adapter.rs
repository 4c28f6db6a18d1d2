//! Auth adapter - Implements login, logout and session refresh using integration_backend

use application::error::ApplicationError;
use application::ports::{AuthPort, TokenRefreshPort};
use async_trait::async_trait;
use domain::{EmailAddress, SessionToken};
use integration_backend::{AuthClient, AuthPaths, BackendConfig};
use tracing::instrument;

use super::backend_adapter::map_client_error;

/// Adapter exposing the auth service through the application ports
#[derive(Debug, Clone)]
pub struct AuthAdapter {
    client: AuthClient,
}

impl AuthAdapter {
    /// Create an adapter from auth service configuration
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the HTTP client cannot be built.
    pub fn new(config: &BackendConfig, paths: AuthPaths) -> Result<Self, ApplicationError> {
        let client = AuthClient::new(config, paths).map_err(map_client_error)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TokenRefreshPort for AuthAdapter {
    #[instrument(skip_all)]
    async fn refresh(
        &self,
        current: Option<SessionToken>,
    ) -> Result<SessionToken, ApplicationError> {
        self.client
            .refresh(current.as_ref())
            .await
            .map_err(map_client_error)
    }
}

#[async_trait]
impl AuthPort for AuthAdapter {
    #[instrument(skip(self, password))]
    async fn login(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<SessionToken, ApplicationError> {
        self.client
            .login(email, password)
            .await
            .map_err(map_client_error)
    }

    #[instrument(skip_all)]
    async fn logout(&self, token: SessionToken) -> Result<(), ApplicationError> {
        self.client.logout(&token).await.map_err(map_client_error)
    }
}
