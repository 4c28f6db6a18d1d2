//! Authenticated request gateway
//!
//! Every call that needs a session goes through [`SessionGateway::execute_with_refresh`].
//! The gateway reads the current credential, runs the operation, and when the
//! backend rejects the credential it refreshes the session once and replays
//! the operation once. Nothing else in the client retries requests.
//!
//! Concurrent calls that fail with the same stale credential share a single
//! refresh: the first caller refreshes while holding the refresh gate, later
//! callers see that the gate's generation moved on and reuse the outcome.

use std::future::Future;
use std::sync::Arc;

use domain::SessionToken;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{CredentialStorePort, TokenRefreshPort};

/// Result of the most recent refresh attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum RefreshOutcome {
    #[default]
    NotAttempted,
    Refreshed,
    Rejected,
}

/// Serializes refreshes and records how the last one ended
#[derive(Debug, Default)]
struct RefreshGate {
    /// Incremented whenever a refresh changes the credential slot
    generation: u64,
    last_outcome: RefreshOutcome,
}

/// Gateway that attaches the session credential and recovers from expiry
pub struct SessionGateway {
    credentials: Arc<dyn CredentialStorePort>,
    refresher: Arc<dyn TokenRefreshPort>,
    refresh_gate: Mutex<RefreshGate>,
}

impl std::fmt::Debug for SessionGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGateway").finish_non_exhaustive()
    }
}

impl SessionGateway {
    /// Create a gateway over a credential store and a refresh operation
    #[must_use]
    pub fn new(
        credentials: Arc<dyn CredentialStorePort>,
        refresher: Arc<dyn TokenRefreshPort>,
    ) -> Self {
        Self {
            credentials,
            refresher,
            refresh_gate: Mutex::new(RefreshGate::default()),
        }
    }

    /// Run `operation` with the current credential, refreshing once on expiry
    ///
    /// `operation` receives the credential to send (`None` when no session is
    /// stored) and performs exactly one HTTP call. It is invoked at most twice:
    /// once with the current credential and, only after an authorization
    /// failure followed by a successful refresh, once more with the refreshed
    /// credential. The replay's outcome is returned verbatim.
    ///
    /// Operations must be safe to repeat once.
    ///
    /// # Errors
    ///
    /// - `NotAuthorized` when the refresh was rejected; the credential is cleared
    /// - `Transport` when no response was received, from the call or the refresh
    /// - `Backend` for any other non-2xx response, unchanged
    #[instrument(skip_all)]
    pub async fn execute_with_refresh<T, F, Fut>(
        &self,
        mut operation: F,
    ) -> Result<T, ApplicationError>
    where
        F: FnMut(Option<SessionToken>) -> Fut,
        Fut: Future<Output = Result<T, ApplicationError>>,
    {
        let observed_generation = self.refresh_gate.lock().await.generation;
        let credential = self.credentials.get().await?;

        let err = match operation(credential.clone()).await {
            Ok(value) => return Ok(value),
            Err(err) if !err.is_authorization_failure() => {
                debug!(error = %err, "Request failed without authorization error");
                return Err(err);
            },
            Err(err) => err,
        };

        debug!(error = %err, "Session rejected, refreshing");
        let refreshed = self.refresh_once(observed_generation, credential).await?;

        debug!("Replaying request with refreshed session");
        operation(Some(refreshed)).await
    }

    /// Like [`execute_with_refresh`](Self::execute_with_refresh), abandoned when `cancel` completes first
    ///
    /// A cancelled refresh leaves the stored credential untouched.
    ///
    /// # Errors
    ///
    /// `Cancelled` if `cancel` resolves before the call finishes, otherwise as
    /// [`execute_with_refresh`](Self::execute_with_refresh).
    pub async fn execute_with_refresh_until<T, F, Fut, C>(
        &self,
        cancel: C,
        operation: F,
    ) -> Result<T, ApplicationError>
    where
        F: FnMut(Option<SessionToken>) -> Fut,
        Fut: Future<Output = Result<T, ApplicationError>>,
        C: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            () = cancel => {
                debug!("Request cancelled by caller");
                Err(ApplicationError::Cancelled)
            },
            result = self.execute_with_refresh(operation) => result,
        }
    }

    /// Refresh the session unless another caller already did since `observed_generation`
    async fn refresh_once(
        &self,
        observed_generation: u64,
        stale: Option<SessionToken>,
    ) -> Result<SessionToken, ApplicationError> {
        let mut gate = self.refresh_gate.lock().await;

        if gate.generation != observed_generation {
            debug!(outcome = ?gate.last_outcome, "Joining refresh completed by another request");
            return match gate.last_outcome {
                RefreshOutcome::Refreshed => self.credentials.get().await?.ok_or_else(|| {
                    ApplicationError::NotAuthorized("Session ended during refresh".to_string())
                }),
                RefreshOutcome::Rejected | RefreshOutcome::NotAttempted => Err(
                    ApplicationError::NotAuthorized("Session refresh was rejected".to_string()),
                ),
            };
        }

        match self.refresher.refresh(stale).await {
            Ok(token) => {
                self.credentials.set(&token).await?;
                gate.generation += 1;
                gate.last_outcome = RefreshOutcome::Refreshed;
                debug!(generation = gate.generation, "Session refreshed");
                Ok(token)
            },
            Err(err) if ends_session(&err) => {
                warn!(error = %err, "Session refresh rejected, clearing credential");
                self.credentials.clear().await?;
                gate.generation += 1;
                gate.last_outcome = RefreshOutcome::Rejected;
                Err(ApplicationError::NotAuthorized(format!(
                    "Session refresh rejected: {err}"
                )))
            },
            Err(err) => {
                warn!(error = %err, "Session refresh failed, keeping credential");
                Err(err)
            },
        }
    }
}

/// Refresh errors after which the stored credential is useless
const fn ends_session(err: &ApplicationError) -> bool {
    matches!(
        err,
        ApplicationError::Backend(_)
            | ApplicationError::NotAuthorized(_)
            | ApplicationError::SessionExpired
            | ApplicationError::Domain(_)
    )
}
