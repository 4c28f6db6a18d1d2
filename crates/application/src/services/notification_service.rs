//! Notification accessors

use std::sync::Arc;

use domain::{Notification, NotificationId};
use tracing::{debug, instrument};

use super::SessionGateway;
use crate::error::ApplicationError;
use crate::ports::NotificationPort;

/// Access to the authenticated user's notifications
pub struct NotificationService {
    gateway: Arc<SessionGateway>,
    port: Arc<dyn NotificationPort>,
}

impl std::fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationService").finish_non_exhaustive()
    }
}

impl NotificationService {
    /// Create a new notification service
    #[must_use]
    pub fn new(gateway: Arc<SessionGateway>, port: Arc<dyn NotificationPort>) -> Self {
        Self { gateway, port }
    }

    /// All notifications of the user
    #[instrument(skip(self))]
    pub async fn notifications(&self) -> Result<Vec<Notification>, ApplicationError> {
        let notifications = self
            .gateway
            .execute_with_refresh(|token| self.port.user_notifications(token))
            .await?;

        debug!(
            total = notifications.len(),
            unread = domain::unread_count(&notifications),
            "Loaded notifications"
        );
        Ok(notifications)
    }

    /// Number of unread notifications
    pub async fn unread_count(&self) -> Result<usize, ApplicationError> {
        Ok(domain::unread_count(&self.notifications().await?))
    }

    /// Mark one notification as read
    ///
    /// Safe to replay after a refresh: marking twice has the same effect.
    #[instrument(skip(self))]
    pub async fn mark_read(&self, notification_id: &NotificationId) -> Result<(), ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.mark_read(token, notification_id))
            .await
    }
}
