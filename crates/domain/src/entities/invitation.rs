//! Invitations for users to join a band

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{BandId, InvitationId, UserId};

/// Response state of an invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    /// Awaiting the invitee's answer
    Pending,
    /// Invitee joined the band
    Accepted,
    /// Invitee declined
    Declined,
    /// Status not known to this client version
    #[serde(other)]
    Unknown,
}

/// Invitation for a user to join a band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    /// Unique invitation identifier
    pub id: InvitationId,
    /// Inviting band
    pub band_id: BandId,
    /// Band name for display
    #[serde(default)]
    pub band_name: Option<String>,
    /// Invited user
    pub invited_user_id: UserId,
    /// Current state
    pub status: InvitationStatus,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    /// Whether the invitee can still accept or decline
    pub fn is_open(&self) -> bool {
        self.status == InvitationStatus::Pending
    }
}
