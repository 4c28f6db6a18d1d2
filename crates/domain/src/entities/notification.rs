//! In-app notifications

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::NotificationId;

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// New or updated booking request
    Booking,
    /// Contract ready or signed
    Contract,
    /// Invoice issued or paid
    Invoice,
    /// Invitation to join a band
    Invitation,
    /// New chat message
    Message,
    /// Kind not known to this client version
    #[serde(other)]
    Other,
}

/// Notification addressed to the current user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier
    pub id: NotificationId,
    /// Category
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Human-readable text
    pub message: String,
    /// Whether the user has seen it
    #[serde(default)]
    pub read: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Count notifications that have not been read yet
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: NotificationId::new(id).unwrap(),
            kind: NotificationKind::Booking,
            message: "New booking request".to_string(),
            read,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn type_field_maps_to_kind() {
        let body = r#"{"id":"n1","type":"invitation","message":"Join us","createdAt":"2025-01-01T00:00:00Z"}"#;
        let n: Notification = serde_json::from_str(body).unwrap();
        assert_eq!(n.kind, NotificationKind::Invitation);
        assert!(!n.read);
    }

    #[test]
    fn unknown_kind_falls_back_to_other() {
        let kind: NotificationKind = serde_json::from_str("\"payout\"").unwrap();
        assert_eq!(kind, NotificationKind::Other);
    }

    #[test]
    fn counts_unread() {
        let list = vec![
            notification("1", true),
            notification("2", false),
            notification("3", false),
        ];
        assert_eq!(unread_count(&list), 2);
        assert_eq!(unread_count(&[]), 0);
    }
}
