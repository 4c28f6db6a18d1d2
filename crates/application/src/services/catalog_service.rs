//! Catalog accessors for event types and musical styles

use std::sync::Arc;

use domain::{EventType, MusicalStyle};
use tracing::instrument;

use super::SessionGateway;
use crate::error::ApplicationError;
use crate::ports::CatalogPort;

/// Read access to the backend's reference lists
pub struct CatalogService {
    gateway: Arc<SessionGateway>,
    port: Arc<dyn CatalogPort>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService").finish_non_exhaustive()
    }
}

impl CatalogService {
    /// Create a new catalog service
    #[must_use]
    pub fn new(gateway: Arc<SessionGateway>, port: Arc<dyn CatalogPort>) -> Self {
        Self { gateway, port }
    }

    #[instrument(skip(self))]
    pub async fn event_types(&self) -> Result<Vec<EventType>, ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.event_types(token))
            .await
    }

    #[instrument(skip(self))]
    pub async fn musical_styles(&self) -> Result<Vec<MusicalStyle>, ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.musical_styles(token))
            .await
    }
}

#[cfg(test)]
mod tests {
    use domain::{EventTypeId, MusicalStyleId};

    use super::*;
    use crate::ports::{MockCatalogPort, MockTokenRefreshPort};
    use crate::testing::{FakeCredentialStore, backend_failure};

    fn service(port: MockCatalogPort) -> CatalogService {
        let mut refresher = MockTokenRefreshPort::new();
        refresher.expect_refresh().never();
        let store = Arc::new(FakeCredentialStore::with_token("t1"));
        let gateway = Arc::new(SessionGateway::new(store, Arc::new(refresher)));
        CatalogService::new(gateway, Arc::new(port))
    }

    #[tokio::test]
    async fn lists_event_types() {
        let mut port = MockCatalogPort::new();
        port.expect_event_types().returning(|_| {
            Ok(vec![EventType {
                id: EventTypeId::new("1").unwrap(),
                name: "Wedding".to_string(),
            }])
        });

        let types = service(port).event_types().await.unwrap();
        assert_eq!(types[0].name, "Wedding");
    }

    #[tokio::test]
    async fn lists_musical_styles() {
        let mut port = MockCatalogPort::new();
        port.expect_musical_styles().returning(|_| {
            Ok(vec![MusicalStyle {
                id: MusicalStyleId::new("jazz").unwrap(),
                name: "Jazz".to_string(),
            }])
        });

        let styles = service(port).musical_styles().await.unwrap();
        assert_eq!(styles.len(), 1);
    }

    #[tokio::test]
    async fn not_found_is_surfaced_unchanged() {
        let mut port = MockCatalogPort::new();
        port.expect_musical_styles()
            .returning(|_| Err(backend_failure(404, "Not Found", "/musical-styles")));

        let err = service(port).musical_styles().await.unwrap_err();
        assert!(err.backend_error().unwrap().is_not_found());
    }
}
