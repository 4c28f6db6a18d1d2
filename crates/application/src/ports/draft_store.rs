//! Form draft storage port
//!
//! Keeps half-filled forms (booking requests, band profiles) across restarts.
//! Drafts are plain JSON values addressed by a caller-chosen key.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::ApplicationError;

/// Port for form draft persistence
#[async_trait]
pub trait DraftStorePort: Send + Sync {
    /// Save a draft, replacing any previous draft under the same key
    async fn save(&self, key: &str, draft: serde_json::Value) -> Result<(), ApplicationError>;

    /// Load a draft
    ///
    /// # Returns
    /// The draft if one was saved under this key, None otherwise
    async fn load(&self, key: &str) -> Result<Option<serde_json::Value>, ApplicationError>;

    /// Delete a draft; deleting a missing draft is not an error
    async fn clear(&self, key: &str) -> Result<(), ApplicationError>;
}

/// Extension trait for typed draft access
#[async_trait]
pub trait DraftStoreExt: DraftStorePort {
    /// Serialize and save a draft
    async fn save_typed<T: Serialize + Sync>(
        &self,
        key: &str,
        draft: &T,
    ) -> Result<(), ApplicationError> {
        let value = serde_json::to_value(draft)
            .map_err(|e| ApplicationError::Internal(format!("Failed to serialize draft: {e}")))?;
        self.save(key, value).await
    }

    /// Load and deserialize a draft
    ///
    /// A stored draft that no longer matches `T` is reported as a storage error
    /// rather than silently dropped.
    async fn load_typed<T: DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> Result<Option<T>, ApplicationError> {
        self.load(key)
            .await?
            .map(|value| {
                serde_json::from_value(value).map_err(|e| {
                    ApplicationError::Storage(format!("Draft {key} has an unexpected shape: {e}"))
                })
            })
            .transpose()
    }
}

impl<S: DraftStorePort + ?Sized> DraftStoreExt for S {}
