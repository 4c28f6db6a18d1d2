//! Process-local credential store

use application::error::ApplicationError;
use application::ports::CredentialStorePort;
use async_trait::async_trait;
use domain::SessionToken;
use parking_lot::RwLock;

/// Credential store that forgets the session when the process exits
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    token: RwLock<Option<SessionToken>>,
}

impl InMemoryCredentialStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a session
    #[must_use]
    pub fn with_token(token: SessionToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }
}

#[async_trait]
impl CredentialStorePort for InMemoryCredentialStore {
    async fn get(&self) -> Result<Option<SessionToken>, ApplicationError> {
        Ok(self.token.read().clone())
    }

    async fn set(&self, token: &SessionToken) -> Result<(), ApplicationError> {
        *self.token.write() = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ApplicationError> {
        *self.token.write() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn readers_observe_latest_write() {
        let store = InMemoryCredentialStore::new();
        assert!(store.get().await.unwrap().is_none());

        store.set(&SessionToken::new("t1").unwrap()).await.unwrap();
        store.set(&SessionToken::new("t2").unwrap()).await.unwrap();
        assert_eq!(store.get().await.unwrap().unwrap().expose(), "t2");

        store.clear().await.unwrap();
        assert!(store.get().await.unwrap().is_none());
    }
}
