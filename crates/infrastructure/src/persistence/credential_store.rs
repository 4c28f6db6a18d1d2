//! File-backed session credential slot

use application::error::ApplicationError;
use application::ports::CredentialStorePort;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::SessionToken;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::slot_storage::JsonSlotStorage;

/// Prefix of the credential slot; the session namespace is appended
pub const ACCESS_TOKEN_SLOT_PREFIX: &str = "access_token_";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCredential {
    access_token: String,
    stored_at: DateTime<Utc>,
}

/// Credential store persisting the token in slot `access_token_<namespace>`
///
/// Every `get` reads the slot, so separate processes sharing the directory
/// observe each other's writes.
#[derive(Debug, Clone)]
pub struct PersistedCredentialStore {
    storage: JsonSlotStorage,
    slot: String,
}

impl PersistedCredentialStore {
    /// Create a store for the given session namespace
    #[must_use]
    pub fn new(storage: JsonSlotStorage, namespace: &str) -> Self {
        Self {
            storage,
            slot: format!("{ACCESS_TOKEN_SLOT_PREFIX}{namespace}"),
        }
    }

    /// Name of the slot the credential is kept in
    pub fn slot(&self) -> &str {
        &self.slot
    }
}

#[async_trait]
impl CredentialStorePort for PersistedCredentialStore {
    #[instrument(skip(self), fields(slot = %self.slot))]
    async fn get(&self) -> Result<Option<SessionToken>, ApplicationError> {
        let Some(stored) = self.storage.read::<StoredCredential>(&self.slot).await? else {
            return Ok(None);
        };

        SessionToken::new(stored.access_token).map(Some).map_err(|e| {
            ApplicationError::Storage(format!("Stored credential in '{}' is invalid: {e}", self.slot))
        })
    }

    #[instrument(skip_all, fields(slot = %self.slot))]
    async fn set(&self, token: &SessionToken) -> Result<(), ApplicationError> {
        let stored = StoredCredential {
            access_token: token.expose().to_string(),
            stored_at: Utc::now(),
        };
        self.storage.write(&self.slot, &stored).await?;
        debug!("Credential stored");
        Ok(())
    }

    #[instrument(skip(self), fields(slot = %self.slot))]
    async fn clear(&self) -> Result<(), ApplicationError> {
        self.storage.remove(&self.slot).await?;
        debug!("Credential cleared");
        Ok(())
    }
}
