//! Port for the persisted session credential
//!
//! Exactly one credential is current at a time. It is written at login and
//! after a successful refresh, and cleared at logout or when a refresh is
//! rejected.

use async_trait::async_trait;
use domain::SessionToken;

use crate::error::ApplicationError;

/// Port for reading and writing the session credential slot
#[async_trait]
pub trait CredentialStorePort: Send + Sync {
    /// Read the current credential, if any
    async fn get(&self) -> Result<Option<SessionToken>, ApplicationError>;

    /// Replace the current credential
    async fn set(&self, token: &SessionToken) -> Result<(), ApplicationError>;

    /// Remove the current credential
    async fn clear(&self) -> Result<(), ApplicationError>;
}
