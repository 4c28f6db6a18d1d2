//! Port for user notifications

use async_trait::async_trait;
use domain::{Notification, NotificationId, SessionToken};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the backend's notification endpoints
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationPort: Send + Sync {
    /// List notifications of the authenticated user
    async fn user_notifications(
        &self,
        token: Option<SessionToken>,
    ) -> Result<Vec<Notification>, ApplicationError>;

    /// Mark a notification as read
    async fn mark_read(
        &self,
        token: Option<SessionToken>,
        notification_id: &NotificationId,
    ) -> Result<(), ApplicationError>;
}
