//! Shared fakes for application-layer tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use domain::{BackendError, SessionToken};
use parking_lot::RwLock;

use crate::error::ApplicationError;
use crate::ports::CredentialStorePort;

/// In-memory credential slot that counts writes
#[derive(Debug, Default)]
pub struct FakeCredentialStore {
    token: RwLock<Option<SessionToken>>,
    writes: AtomicUsize,
    unreadable: AtomicBool,
}

impl FakeCredentialStore {
    pub fn with_token(value: &str) -> Self {
        Self {
            token: RwLock::new(Some(token(value))),
            writes: AtomicUsize::new(0),
            unreadable: AtomicBool::new(false),
        }
    }

    /// Slot whose content fails to load until it is overwritten or cleared
    pub fn unreadable(value: &str) -> Self {
        let store = Self::with_token(value);
        store.unreadable.store(true, Ordering::SeqCst);
        store
    }

    /// Raw value of the stored token
    pub fn current(&self) -> Option<String> {
        self.token.read().as_ref().map(|t| t.expose().to_string())
    }

    /// Number of `set` and `clear` calls
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialStorePort for FakeCredentialStore {
    async fn get(&self) -> Result<Option<SessionToken>, ApplicationError> {
        if self.unreadable.load(Ordering::SeqCst) {
            return Err(ApplicationError::Storage("credential slot is corrupt".to_string()));
        }
        Ok(self.token.read().clone())
    }

    async fn set(&self, token: &SessionToken) -> Result<(), ApplicationError> {
        *self.token.write() = Some(token.clone());
        self.unreadable.store(false, Ordering::SeqCst);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn clear(&self) -> Result<(), ApplicationError> {
        *self.token.write() = None;
        self.unreadable.store(false, Ordering::SeqCst);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn token(value: &str) -> SessionToken {
    SessionToken::new(value).unwrap()
}

pub fn backend_failure(status: u16, error: &str, path: &str) -> ApplicationError {
    ApplicationError::Backend(BackendError::new(
        status,
        error,
        path,
        "2025-01-01T00:00:00.000Z",
    ))
}

pub fn unauthorized(path: &str) -> ApplicationError {
    backend_failure(401, "Unauthorized", path)
}
