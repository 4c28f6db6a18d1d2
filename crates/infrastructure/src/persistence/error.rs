//! Storage errors and their mapping to the application layer

use application::error::ApplicationError;
use thiserror::Error;

/// Errors raised by the JSON slot storage
#[derive(Debug, Error)]
pub enum StorageError {
    /// Slot name cannot be used as a file name
    #[error("Invalid slot name '{0}'")]
    InvalidSlot(String),

    /// Reading, writing or removing the slot file failed
    #[error("I/O error on slot '{slot}': {source}")]
    Io {
        /// Slot being accessed
        slot: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Slot content is not valid JSON for the requested type
    #[error("Slot '{slot}' holds unreadable data: {message}")]
    Corrupt {
        /// Slot being read
        slot: String,
        /// Decoder message
        message: String,
    },

    /// Value could not be encoded
    #[error("Failed to encode slot '{slot}': {message}")]
    Encode {
        /// Slot being written
        slot: String,
        /// Encoder message
        message: String,
    },
}

impl From<StorageError> for ApplicationError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}
