//! Client wiring
//!
//! Builds one [`SessionGateway`] and hands it to every feature service, so
//! all of them share the credential slot and the single-flight refresh.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{AuthPort, CredentialStorePort, DraftStorePort, TokenRefreshPort};
use application::services::{
    AccountService, BandService, BookingService, CatalogService, ChatService, InvitationService,
    NotificationService, SessionGateway, SessionService,
};
use tracing::info;

use crate::adapters::{AuthAdapter, BackendAdapter};
use crate::config::AppConfig;
use crate::persistence::{JsonSlotStorage, PersistedCredentialStore, PersistedDraftStore};

/// Fully wired client
pub struct ClientContext {
    /// Login, logout and session state
    pub session: SessionService,
    pub accounts: AccountService,
    pub bands: BandService,
    pub bookings: BookingService,
    pub chats: ChatService,
    pub catalog: CatalogService,
    pub notifications: NotificationService,
    pub invitations: InvitationService,
    /// Cached form drafts
    pub drafts: Arc<dyn DraftStorePort>,
    gateway: Arc<SessionGateway>,
}

impl std::fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientContext").finish_non_exhaustive()
    }
}

impl ClientContext {
    /// Wire the client with file-backed storage under `storage.directory`
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if an HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let storage = JsonSlotStorage::new(config.storage.directory.clone());
        let credentials = Arc::new(PersistedCredentialStore::new(
            storage.clone(),
            &config.storage.session_namespace,
        ));
        let drafts = Arc::new(PersistedDraftStore::new(storage));

        info!(
            storage_dir = %config.storage.directory.display(),
            namespace = %config.storage.session_namespace,
            "Using file-backed session storage"
        );

        Self::build(config, credentials, drafts)
    }

    /// Wire the client over the given stores
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if an HTTP client cannot be built.
    pub fn build(
        config: &AppConfig,
        credentials: Arc<dyn CredentialStorePort>,
        drafts: Arc<dyn DraftStorePort>,
    ) -> Result<Self, ApplicationError> {
        let backend = Arc::new(BackendAdapter::new(&config.backend_config())?);
        let auth = Arc::new(AuthAdapter::new(
            &config.auth_service_config(),
            config.auth.clone(),
        )?);

        let refresher: Arc<dyn TokenRefreshPort> = auth.clone();
        let gateway = Arc::new(SessionGateway::new(Arc::clone(&credentials), refresher));

        let auth_port: Arc<dyn AuthPort> = auth;
        Ok(Self {
            session: SessionService::new(auth_port, credentials),
            accounts: AccountService::new(Arc::clone(&gateway), backend.clone()),
            bands: BandService::new(Arc::clone(&gateway), backend.clone()),
            bookings: BookingService::new(Arc::clone(&gateway), backend.clone()),
            chats: ChatService::new(Arc::clone(&gateway), backend.clone()),
            catalog: CatalogService::new(Arc::clone(&gateway), backend.clone()),
            notifications: NotificationService::new(Arc::clone(&gateway), backend.clone()),
            invitations: InvitationService::new(Arc::clone(&gateway), backend),
            drafts,
            gateway,
        })
    }

    /// Gateway shared by all feature services
    #[must_use]
    pub fn gateway(&self) -> &Arc<SessionGateway> {
        &self.gateway
    }
}
