//! Port for reading band chats

use async_trait::async_trait;
use domain::{BandId, Chat, ChatId, ChatMessage, SessionToken};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the backend's chat endpoints
///
/// Every method takes the credential to send; `None` sends the request
/// without an `Authorization` header.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChatPort: Send + Sync {
    /// List the chats of a band
    async fn band_chats(
        &self,
        token: Option<SessionToken>,
        band_id: &BandId,
    ) -> Result<Vec<Chat>, ApplicationError>;

    /// Fetch the message history of a chat
    async fn chat_history(
        &self,
        token: Option<SessionToken>,
        chat_id: &ChatId,
    ) -> Result<Vec<ChatMessage>, ApplicationError>;
}
