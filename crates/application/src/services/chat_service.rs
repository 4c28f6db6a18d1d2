//! Chat accessors

use std::sync::Arc;

use domain::{BandId, Chat, ChatId, ChatMessage};
use tracing::instrument;

use super::SessionGateway;
use crate::error::ApplicationError;
use crate::ports::ChatPort;

/// Read access to band chats
pub struct ChatService {
    gateway: Arc<SessionGateway>,
    port: Arc<dyn ChatPort>,
}

impl std::fmt::Debug for ChatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatService").finish_non_exhaustive()
    }
}

impl ChatService {
    /// Create a new chat service
    #[must_use]
    pub fn new(gateway: Arc<SessionGateway>, port: Arc<dyn ChatPort>) -> Self {
        Self { gateway, port }
    }

    /// All chats of a band
    #[instrument(skip(self))]
    pub async fn band_chats(&self, band_id: &BandId) -> Result<Vec<Chat>, ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.band_chats(token, band_id))
            .await
    }

    /// Messages of a chat, in the order the backend returns them
    #[instrument(skip(self))]
    pub async fn chat_history(
        &self,
        chat_id: &ChatId,
    ) -> Result<Vec<ChatMessage>, ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.chat_history(token, chat_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use domain::{MessageId, UserId};

    use super::*;
    use crate::ports::{MockChatPort, MockTokenRefreshPort};
    use crate::testing::{FakeCredentialStore, backend_failure, token, unauthorized};

    fn service(port: MockChatPort, refresher: MockTokenRefreshPort) -> ChatService {
        let store = Arc::new(FakeCredentialStore::with_token("t1"));
        let gateway = Arc::new(SessionGateway::new(store, Arc::new(refresher)));
        ChatService::new(gateway, Arc::new(port))
    }

    fn message(id: &str) -> ChatMessage {
        ChatMessage {
            id: MessageId::new(id).unwrap(),
            chat_id: ChatId::new("c1").unwrap(),
            sender_id: UserId::new("u1").unwrap(),
            content: "Soundcheck at 6?".to_string(),
            sent_at: Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn history_is_passed_through() {
        let mut port = MockChatPort::new();
        port.expect_chat_history()
            .withf(|token, id| {
                token.as_ref().map(domain::SessionToken::expose) == Some("t1") && id.as_str() == "c1"
            })
            .times(1)
            .returning(|_, _| Ok(vec![message("m1"), message("m2")]));
        let mut refresher = MockTokenRefreshPort::new();
        refresher.expect_refresh().never();

        let history = service(port, refresher)
            .chat_history(&ChatId::new("c1").unwrap())
            .await
            .unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id.as_str(), "m1");
    }

    #[tokio::test]
    async fn expired_session_is_refreshed_for_band_chats() {
        let mut port = MockChatPort::new();
        port.expect_band_chats()
            .times(2)
            .returning(|token, _| match token {
                Some(t) if t.expose() == "t2" => Ok(Vec::new()),
                _ => Err(unauthorized("/chat/band/b1")),
            });
        let mut refresher = MockTokenRefreshPort::new();
        refresher
            .expect_refresh()
            .times(1)
            .returning(|_| Ok(token("t2")));

        let chats = service(port, refresher)
            .band_chats(&BandId::new("b1").unwrap())
            .await
            .unwrap();

        assert!(chats.is_empty());
    }

    #[tokio::test]
    async fn server_error_is_surfaced() {
        let mut port = MockChatPort::new();
        port.expect_chat_history()
            .returning(|_, _| Err(backend_failure(500, "Internal", "/chat/1/history")));
        let mut refresher = MockTokenRefreshPort::new();
        refresher.expect_refresh().never();

        let err = service(port, refresher)
            .chat_history(&ChatId::new("1").unwrap())
            .await
            .unwrap_err();

        assert_eq!(err.backend_error().unwrap().path, "/chat/1/history");
    }
}
