//! Session lifecycle: login, logout, and session status

use std::sync::Arc;

use domain::EmailAddress;
use tracing::{info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{AuthPort, CredentialStorePort};

/// Service that creates and ends the user's session
pub struct SessionService {
    auth: Arc<dyn AuthPort>,
    credentials: Arc<dyn CredentialStorePort>,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService").finish_non_exhaustive()
    }
}

impl SessionService {
    /// Create a new session service
    #[must_use]
    pub fn new(auth: Arc<dyn AuthPort>, credentials: Arc<dyn CredentialStorePort>) -> Self {
        Self { auth, credentials }
    }

    /// Log in and store the issued credential
    ///
    /// A failed login leaves any existing credential in place.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &EmailAddress, password: &str) -> Result<(), ApplicationError> {
        let token = self.auth.login(email, password).await?;
        self.credentials.set(&token).await?;
        info!("Logged in");
        Ok(())
    }

    /// End the session
    ///
    /// The auth service is told about the logout when a readable credential
    /// exists, but its answer does not matter: the local credential is cleared
    /// either way, including when the stored slot cannot be read.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApplicationError> {
        match self.credentials.get().await {
            Ok(Some(token)) => {
                if let Err(e) = self.auth.logout(token).await {
                    warn!(error = %e, "Server-side logout failed, clearing local session anyway");
                }
            },
            Ok(None) => {},
            Err(e) => {
                warn!(error = %e, "Stored credential unreadable, skipping server-side logout");
            },
        }

        self.credentials.clear().await?;
        info!("Logged out");
        Ok(())
    }

    /// Whether a credential is currently stored
    ///
    /// The credential may still be expired; the gateway finds out on the next call.
    pub async fn is_authenticated(&self) -> Result<bool, ApplicationError> {
        Ok(self.credentials.get().await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockAuthPort;
    use crate::testing::{FakeCredentialStore, backend_failure, token};

    fn email() -> EmailAddress {
        EmailAddress::new("drummer@band.de").unwrap()
    }

    #[tokio::test]
    async fn login_stores_issued_token() {
        let mut auth = MockAuthPort::new();
        auth.expect_login()
            .withf(|email, password| email.as_str() == "drummer@band.de" && password == "pw")
            .times(1)
            .returning(|_, _| Ok(token("issued")));
        let store = Arc::new(FakeCredentialStore::default());
        let service = SessionService::new(Arc::new(auth), store.clone());

        service.login(&email(), "pw").await.unwrap();

        assert_eq!(store.current().as_deref(), Some("issued"));
        assert!(service.is_authenticated().await.unwrap());
    }

    #[tokio::test]
    async fn failed_login_keeps_previous_session() {
        let mut auth = MockAuthPort::new();
        auth.expect_login()
            .returning(|_, _| Err(backend_failure(401, "Invalid credentials", "/auth/login")));
        let store = Arc::new(FakeCredentialStore::with_token("previous"));
        let service = SessionService::new(Arc::new(auth), store.clone());

        let err = service.login(&email(), "wrong").await.unwrap_err();

        assert_eq!(err.backend_error().unwrap().status_code, 401);
        assert_eq!(store.current().as_deref(), Some("previous"));
    }

    #[tokio::test]
    async fn logout_clears_session_even_when_server_fails() {
        let mut auth = MockAuthPort::new();
        auth.expect_logout()
            .times(1)
            .returning(|_| Err(ApplicationError::Transport("unreachable".to_string())));
        let store = Arc::new(FakeCredentialStore::with_token("t1"));
        let service = SessionService::new(Arc::new(auth), store.clone());

        service.logout().await.unwrap();

        assert!(store.current().is_none());
        assert!(!service.is_authenticated().await.unwrap());
    }

    #[tokio::test]
    async fn logout_clears_unreadable_credential() {
        let mut auth = MockAuthPort::new();
        auth.expect_logout().never();
        let store = Arc::new(FakeCredentialStore::unreadable("t1"));
        let service = SessionService::new(Arc::new(auth), store.clone());

        service.logout().await.unwrap();

        assert!(store.current().is_none());
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn logout_without_session_skips_server() {
        let mut auth = MockAuthPort::new();
        auth.expect_logout().never();
        let store = Arc::new(FakeCredentialStore::default());
        let service = SessionService::new(Arc::new(auth), store.clone());

        service.logout().await.unwrap();

        assert_eq!(store.writes(), 1);
    }
}
