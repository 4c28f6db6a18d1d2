//! Marketplace user

use serde::{Deserialize, Serialize};

use crate::value_objects::{EmailAddress, UserId};

/// Role a user plays on the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Plays in one or more bands
    Musician,
    /// Books bands for events
    Organizer,
    /// Platform administrator
    Admin,
    /// Role not known to this client version
    #[serde(other)]
    Unknown,
}

/// The authenticated user's account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: UserId,
    /// Login email
    pub email: EmailAddress,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Marketplace role
    pub role: UserRole,
    /// Whether the email address has been verified
    #[serde(default)]
    pub email_verified: bool,
}

impl User {
    /// Full display name
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
