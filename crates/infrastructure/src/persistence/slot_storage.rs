//! Named JSON slots on the local file system
//!
//! Each slot is one file `<dir>/<slot>.json` holding a plain JSON document.
//! Writes go to a temporary file in the same directory and are renamed into
//! place, so a reader sees either the old or the new document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::error::StorageError;

const MAX_SLOT_LEN: usize = 128;

/// Whether `slot` is usable as a file stem
pub fn is_valid_slot_name(slot: &str) -> bool {
    !slot.is_empty()
        && slot.len() <= MAX_SLOT_LEN
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Directory-backed store of named JSON documents
#[derive(Debug, Clone)]
pub struct JsonSlotStorage {
    dir: PathBuf,
}

impl JsonSlotStorage {
    /// Create a storage rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the slot files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> Result<PathBuf, StorageError> {
        if !is_valid_slot_name(slot) {
            return Err(StorageError::InvalidSlot(slot.to_string()));
        }
        Ok(self.dir.join(format!("{slot}.json")))
    }

    /// Read a slot, returning `None` if it was never written or was removed
    #[instrument(skip(self))]
    pub async fn read<T: DeserializeOwned>(&self, slot: &str) -> Result<Option<T>, StorageError> {
        let path = self.slot_path(slot)?;

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Io {
                    slot: slot.to_string(),
                    source,
                });
            },
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                slot: slot.to_string(),
                message: e.to_string(),
            })
    }

    /// Replace the content of a slot
    #[instrument(skip(self, value))]
    pub async fn write<T: Serialize + Sync>(&self, slot: &str, value: &T) -> Result<(), StorageError> {
        let path = self.slot_path(slot)?;
        let io_error = |source: std::io::Error| StorageError::Io {
            slot: slot.to_string(),
            source,
        };

        let bytes = serde_json::to_vec(value).map_err(|e| StorageError::Encode {
            slot: slot.to_string(),
            message: e.to_string(),
        })?;

        fs::create_dir_all(&self.dir).await.map_err(io_error)?;

        let tmp_path = self.dir.join(format!(".{slot}.{}.tmp", Uuid::new_v4()));
        if let Err(source) = fs::write(&tmp_path, &bytes).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(io_error(source));
        }
        if let Err(source) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(io_error(source));
        }

        debug!(bytes = bytes.len(), "Slot written");
        Ok(())
    }

    /// Delete a slot; removing a missing slot is not an error
    #[instrument(skip(self))]
    pub async fn remove(&self, slot: &str) -> Result<(), StorageError> {
        let path = self.slot_path(slot)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Slot removed");
                Ok(())
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                slot: slot.to_string(),
                source,
            }),
        }
    }
}
