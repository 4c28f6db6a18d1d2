//! File-backed form draft cache
//!
//! Implements the `DraftStorePort` with one slot per draft key.

use application::error::ApplicationError;
use application::ports::DraftStorePort;
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::error::StorageError;
use super::slot_storage::{JsonSlotStorage, is_valid_slot_name};

/// Prefix of draft slots; the draft key is appended
pub const FORM_DRAFT_SLOT_PREFIX: &str = "form_draft_";

/// Draft store keeping each draft in slot `form_draft_<key>`
#[derive(Debug, Clone)]
pub struct PersistedDraftStore {
    storage: JsonSlotStorage,
}

impl PersistedDraftStore {
    /// Create a new draft store
    #[must_use]
    pub const fn new(storage: JsonSlotStorage) -> Self {
        Self { storage }
    }

    fn slot(key: &str) -> Result<String, StorageError> {
        let slot = format!("{FORM_DRAFT_SLOT_PREFIX}{key}");
        if key.is_empty() || !is_valid_slot_name(&slot) {
            return Err(StorageError::InvalidSlot(slot));
        }
        Ok(slot)
    }
}

#[async_trait]
impl DraftStorePort for PersistedDraftStore {
    #[instrument(skip(self, draft))]
    async fn save(&self, key: &str, draft: serde_json::Value) -> Result<(), ApplicationError> {
        let slot = Self::slot(key)?;
        self.storage.write(&slot, &draft).await?;
        debug!("Draft saved");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn load(&self, key: &str) -> Result<Option<serde_json::Value>, ApplicationError> {
        let slot = Self::slot(key)?;
        Ok(self.storage.read(&slot).await?)
    }

    #[instrument(skip(self))]
    async fn clear(&self, key: &str) -> Result<(), ApplicationError> {
        let slot = Self::slot(key)?;
        self.storage.remove(&slot).await?;
        Ok(())
    }
}
