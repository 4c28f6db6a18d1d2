//! Port for exchanging an expired session for a new one

use async_trait::async_trait;
use domain::SessionToken;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the auth service's refresh operation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TokenRefreshPort: Send + Sync {
    /// Exchange the current (possibly expired or absent) credential for a new one
    ///
    /// # Errors
    ///
    /// `Backend` when the auth service rejects the exchange, `Transport` when
    /// it cannot be reached.
    async fn refresh(&self, current: Option<SessionToken>) -> Result<SessionToken, ApplicationError>;
}
