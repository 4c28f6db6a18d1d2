//! Chats between bands and organizers
//!
//! Message delivery happens in the backend; the client reads chat lists and
//! history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{BandId, ChatId, MessageId, UserId};

/// A single message in a chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique message identifier
    pub id: MessageId,
    /// Chat the message belongs to
    pub chat_id: ChatId,
    /// Author
    pub sender_id: UserId,
    /// Message text
    pub content: String,
    /// Server receive time
    pub sent_at: DateTime<Utc>,
}

/// A conversation thread attached to a band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// Unique chat identifier
    pub id: ChatId,
    /// Band the chat belongs to
    pub band_id: BandId,
    /// Users taking part
    #[serde(default)]
    pub participants: Vec<UserId>,
    /// Most recent message, if any
    #[serde(default)]
    pub last_message: Option<ChatMessage>,
    /// Unread message count for the current user
    #[serde(default)]
    pub unread_count: u32,
}
