//! Port for band invitations

use async_trait::async_trait;
use domain::{Invitation, InvitationId, SessionToken};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the backend's invitation endpoints
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InvitationPort: Send + Sync {
    /// List invitations addressed to the authenticated user
    async fn user_invitations(
        &self,
        token: Option<SessionToken>,
    ) -> Result<Vec<Invitation>, ApplicationError>;

    /// Accept an invitation, returning its updated state
    async fn accept(
        &self,
        token: Option<SessionToken>,
        invitation_id: &InvitationId,
    ) -> Result<Invitation, ApplicationError>;

    /// Decline an invitation, returning its updated state
    async fn decline(
        &self,
        token: Option<SessionToken>,
        invitation_id: &InvitationId,
    ) -> Result<Invitation, ApplicationError>;
}
