//! Auth service client: login, session refresh and logout

use domain::{EmailAddress, SessionToken};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::{AuthPaths, BackendConfig};
use crate::error::BackendClientError;
use crate::transport::HttpTransport;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: String,
}

impl TokenResponse {
    fn into_token(self, path: &str) -> Result<SessionToken, BackendClientError> {
        SessionToken::new(self.access_token)
            .map_err(|e| BackendClientError::Parse(format!("{path}: {e}")))
    }
}

/// HTTP client for the auth service
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: HttpTransport,
    paths: AuthPaths,
}

impl AuthClient {
    /// Create a new auth client
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the configuration is invalid or the HTTP
    /// client cannot be initialized.
    pub fn new(config: &BackendConfig, paths: AuthPaths) -> Result<Self, BackendClientError> {
        Ok(Self {
            http: HttpTransport::new(config)?,
            paths,
        })
    }

    /// Exchange email and password for a session token
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<SessionToken, BackendClientError> {
        let path = self.paths.login.as_str();
        let body = LoginRequest {
            email: email.as_str(),
            password,
        };
        let request = self.http.request(Method::POST, path, None).json(&body);

        let response: TokenResponse = self.http.send_json(request, path).await?;
        debug!("Login accepted");
        response.into_token(path)
    }

    /// Exchange the current (possibly expired) token for a new one
    ///
    /// The current token is sent both as bearer credential and in the body.
    #[instrument(skip_all)]
    pub async fn refresh(
        &self,
        current: Option<&SessionToken>,
    ) -> Result<SessionToken, BackendClientError> {
        let path = self.paths.refresh.as_str();
        let body = RefreshRequest {
            access_token: current.map(SessionToken::expose),
        };
        let request = self.http.request(Method::POST, path, current).json(&body);

        let response: TokenResponse = self.http.send_json(request, path).await?;
        debug!("Session refreshed");
        response.into_token(path)
    }

    /// Invalidate a token on the server
    #[instrument(skip_all)]
    pub async fn logout(&self, token: &SessionToken) -> Result<(), BackendClientError> {
        let path = self.paths.logout.as_str();
        let request = self.http.request(Method::POST, path, Some(token));
        self.http.send_empty(request, path).await
    }
}
