//! Bands, their members and their published offers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::MusicalStyle;
use crate::value_objects::{BandId, OfferId, UserId};

/// Role of a member within a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandRole {
    /// Manages the band profile and bookings
    Admin,
    /// Regular member
    Member,
    /// Role not known to this client version
    #[serde(other)]
    Unknown,
}

/// A user's membership in a band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandMember {
    /// Member's user id
    pub user_id: UserId,
    /// Member's role
    pub role: BandRole,
}

/// Band profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Band {
    /// Unique band identifier
    pub id: BandId,
    /// Band name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Home city
    #[serde(default)]
    pub city: Option<String>,
    /// Styles the band plays
    #[serde(default)]
    pub musical_styles: Vec<MusicalStyle>,
    /// Members of the band
    #[serde(default)]
    pub members: Vec<BandMember>,
}

impl Band {
    /// Whether the given user administers this band
    pub fn is_admin(&self, user_id: &UserId) -> bool {
        self.members
            .iter()
            .any(|m| &m.user_id == user_id && m.role == BandRole::Admin)
    }
}

/// Priced offer published by a band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Unique offer identifier
    pub id: OfferId,
    /// Band publishing the offer
    pub band_id: BandId,
    /// Offer title
    pub title: String,
    /// Details shown to organizers
    #[serde(default)]
    pub description: Option<String>,
    /// Price in the offer's currency
    pub price: f64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Publication time
    pub created_at: DateTime<Utc>,
}
