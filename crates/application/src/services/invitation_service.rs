//! Band invitation accessors

use std::sync::Arc;

use domain::{Invitation, InvitationId};
use tracing::{info, instrument};

use super::SessionGateway;
use crate::error::ApplicationError;
use crate::ports::InvitationPort;

/// Access to invitations addressed to the authenticated user
pub struct InvitationService {
    gateway: Arc<SessionGateway>,
    port: Arc<dyn InvitationPort>,
}

impl std::fmt::Debug for InvitationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvitationService").finish_non_exhaustive()
    }
}

impl InvitationService {
    /// Create a new invitation service
    #[must_use]
    pub fn new(gateway: Arc<SessionGateway>, port: Arc<dyn InvitationPort>) -> Self {
        Self { gateway, port }
    }

    /// All invitations, including answered ones
    #[instrument(skip(self))]
    pub async fn invitations(&self) -> Result<Vec<Invitation>, ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.user_invitations(token))
            .await
    }

    /// Invitations that still wait for an answer
    pub async fn open_invitations(&self) -> Result<Vec<Invitation>, ApplicationError> {
        let mut invitations = self.invitations().await?;
        invitations.retain(Invitation::is_open);
        Ok(invitations)
    }

    /// Accept an invitation and join the band
    #[instrument(skip(self))]
    pub async fn accept(&self, invitation_id: &InvitationId) -> Result<Invitation, ApplicationError> {
        let invitation = self
            .gateway
            .execute_with_refresh(|token| self.port.accept(token, invitation_id))
            .await?;
        info!(band_id = %invitation.band_id, "Invitation accepted");
        Ok(invitation)
    }

    #[instrument(skip(self))]
    pub async fn decline(
        &self,
        invitation_id: &InvitationId,
    ) -> Result<Invitation, ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.decline(token, invitation_id))
            .await
    }
}
