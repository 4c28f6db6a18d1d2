//! Shared request plumbing for the backend and auth clients
//!
//! Every request gets a fresh `x-request-id`, an optional bearer token, and
//! the same mapping from HTTP outcomes to [`BackendClientError`]:
//!
//! - no response (refused, DNS, timeout) → `Connection` / `Timeout`
//! - non-2xx → `Backend`, using the body when it is a well-formed
//!   `{statusCode, error, path, timestamp}` object and a normalized copy otherwise
//! - 2xx with an undecodable body → `Parse`

use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use domain::{BackendError, SessionToken};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::BackendConfig;
use crate::error::BackendClientError;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Clone)]
pub(crate) struct HttpTransport {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl HttpTransport {
    pub(crate) fn new(config: &BackendConfig) -> Result<Self, BackendClientError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| BackendClientError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.trimmed_base_url().to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Start a request to `path`, relative to the base URL
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&SessionToken>,
    ) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{path}", self.base_url))
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string());

        match token {
            Some(token) => builder.bearer_auth(token.expose()),
            None => builder,
        }
    }

    /// Send a request and turn non-2xx responses into `Backend` errors
    pub(crate) async fn send(
        &self,
        builder: RequestBuilder,
        path: &str,
    ) -> Result<Response, BackendClientError> {
        let response = builder.send().await.map_err(|e| self.transport_error(&e))?;
        let status = response.status();
        debug!(%status, path, "Response received");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.map_err(|e| self.transport_error(&e))?;
        Err(BackendClientError::Backend(normalize_error_body(
            status, &body, path,
        )))
    }

    /// Send a request and decode the JSON body of a 2xx response
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        path: &str,
    ) -> Result<T, BackendClientError> {
        let response = self.send(builder, path).await?;
        let body = response.text().await.map_err(|e| self.transport_error(&e))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(path, error = %e, "Unexpected response body");
            BackendClientError::Parse(format!("{path}: {e}"))
        })
    }

    /// Send a request whose 2xx body carries nothing of interest
    pub(crate) async fn send_empty(
        &self,
        builder: RequestBuilder,
        path: &str,
    ) -> Result<(), BackendClientError> {
        self.send(builder, path).await.map(drop)
    }

    fn transport_error(&self, err: &reqwest::Error) -> BackendClientError {
        if err.is_timeout() {
            BackendClientError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            BackendClientError::Connection(err.to_string())
        }
    }
}

/// Build the error value for a non-2xx response
///
/// Bodies already in the backend's error shape are returned as sent. Anything
/// else (HTML error pages from a proxy, plain text, empty bodies) is wrapped
/// with the status, the body text or the status reason, the request path, and
/// the current time.
pub(crate) fn normalize_error_body(status: StatusCode, body: &str, path: &str) -> BackendError {
    if let Ok(error) = serde_json::from_str::<BackendError>(body) {
        return error;
    }

    let trimmed = body.trim();
    let message = if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    };

    BackendError::new(
        status.as_u16(),
        message,
        path,
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_error_is_kept_verbatim() {
        let body = r#"{"statusCode":500,"error":"Internal","path":"/chat/1/history","timestamp":"2025-01-01T00:00:00.000Z"}"#;
        let err = normalize_error_body(StatusCode::INTERNAL_SERVER_ERROR, body, "/other");

        assert_eq!(err.status_code, 500);
        assert_eq!(err.error, "Internal");
        assert_eq!(err.path, "/chat/1/history");
        assert_eq!(err.timestamp, "2025-01-01T00:00:00.000Z");
    }

    #[test]
    fn plain_text_body_is_wrapped() {
        let err = normalize_error_body(StatusCode::BAD_GATEWAY, " upstream down\n", "/bands/user");

        assert_eq!(err.status_code, 502);
        assert_eq!(err.error, "upstream down");
        assert_eq!(err.path, "/bands/user");
        assert!(chrono::DateTime::parse_from_rfc3339(&err.timestamp).is_ok());
    }

    #[test]
    fn empty_body_uses_status_reason() {
        let err = normalize_error_body(StatusCode::UNAUTHORIZED, "", "/users/me");

        assert_eq!(err.status_code, 401);
        assert_eq!(err.error, "Unauthorized");
    }

    #[test]
    fn json_in_other_shape_is_wrapped() {
        let err = normalize_error_body(StatusCode::BAD_REQUEST, r#"{"message":"bad"}"#, "/email/verify");

        assert_eq!(err.status_code, 400);
        assert_eq!(err.error, r#"{"message":"bad"}"#);
    }

    #[test]
    fn transport_rejects_invalid_config() {
        let config = BackendConfig::new("not a url");
        assert!(matches!(
            HttpTransport::new(&config),
            Err(BackendClientError::Configuration(_))
        ));
    }
}
