//! Port for the event type and musical style catalogs

use async_trait::async_trait;
use domain::{EventType, MusicalStyle, SessionToken};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the backend's catalog endpoints
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// List all event types
    async fn event_types(
        &self,
        token: Option<SessionToken>,
    ) -> Result<Vec<EventType>, ApplicationError>;

    /// List all musical styles
    async fn musical_styles(
        &self,
        token: Option<SessionToken>,
    ) -> Result<Vec<MusicalStyle>, ApplicationError>;
}
