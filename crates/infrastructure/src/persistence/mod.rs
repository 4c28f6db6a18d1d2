//! Local persistence
//!
//! The client keeps a handful of small JSON documents on disk: the session
//! credential and cached form drafts. Each lives in its own named slot.

mod credential_store;
mod draft_store;
mod error;
mod slot_storage;

pub use credential_store::{ACCESS_TOKEN_SLOT_PREFIX, PersistedCredentialStore};
pub use draft_store::{FORM_DRAFT_SLOT_PREFIX, PersistedDraftStore};
pub use error::StorageError;
pub use slot_storage::{JsonSlotStorage, is_valid_slot_name};
