//! End-to-end tests of the wired client against mock backend and auth servers
//!
//! Every feature call goes through the shared gateway, so these tests pin the
//! refresh and replay behavior as seen over HTTP.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use application::ApplicationError;
use application::ports::CredentialStorePort;
use domain::{BandId, ChatId, EmailAddress, SessionToken};
use infrastructure::{
    AppConfig, ClientContext, InMemoryCredentialStore, JsonSlotStorage, PersistedCredentialStore,
    PersistedDraftStore,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn token(value: &str) -> SessionToken {
    SessionToken::new(value).expect("token")
}

fn config(backend_url: &str, auth_url: &str) -> AppConfig {
    AppConfig::from_vars([
        ("GIGBOOK_BACKEND_URL", backend_url),
        ("GIGBOOK_AUTH_URL", auth_url),
        ("GIGBOOK_PAGE_URL", "https://gigbook.app"),
        ("GIGBOOK_OAUTH_CLIENT_ID", "client-123"),
        ("GIGBOOK_MAPS_API_KEY", "maps-key"),
        ("GIGBOOK_HTTP__TIMEOUT_SECS", "2"),
        ("GIGBOOK_HTTP__CONNECT_TIMEOUT_SECS", "1"),
    ])
    .expect("config")
}

fn context(
    backend: &str,
    auth: &str,
    credentials: Arc<dyn CredentialStorePort>,
) -> (ClientContext, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let drafts = Arc::new(PersistedDraftStore::new(JsonSlotStorage::new(dir.path())));
    let context = ClientContext::build(&config(backend, auth), credentials, drafts).expect("context");
    (context, dir)
}

async fn mount_band(server: &MockServer, bearer: &str, status: u16) {
    let response = if status == 200 {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "b1", "name": "The Gigs"}))
    } else {
        let error = if status == 403 { "Forbidden" } else { "Unauthorized" };
        ResponseTemplate::new(status).set_body_json(serde_json::json!({
            "statusCode": status,
            "error": error,
            "path": "/bands/b1",
            "timestamp": "2025-05-01T12:00:00.000Z"
        }))
    };

    Mock::given(method("GET"))
        .and(path("/bands/b1"))
        .and(header("authorization", format!("Bearer {bearer}").as_str()))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mount_refresh(server: &MockServer, response: ResponseTemplate, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn band_id() -> BandId {
    BandId::new("b1").unwrap()
}

// ---- Expired session is refreshed and the call replayed ----

#[tokio::test]
async fn expired_session_is_refreshed_and_replayed() {
    let backend = MockServer::start().await;
    let auth = MockServer::start().await;

    mount_band(&backend, "old", 401).await;
    mount_band(&backend, "new", 200).await;
    mount_refresh(
        &auth,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"accessToken": "new"})),
        1,
    )
    .await;

    let credentials = Arc::new(InMemoryCredentialStore::with_token(token("old")));
    let (client, _dir) = context(&backend.uri(), &auth.uri(), credentials.clone());

    let band = client.bands.band(&band_id()).await.unwrap();

    assert_eq!(band.id.as_str(), "b1");
    assert_eq!(credentials.get().await.unwrap(), Some(token("new")));
    assert_eq!(backend.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn refresh_sends_the_stale_credential() {
    let backend = MockServer::start().await;
    let auth = MockServer::start().await;

    mount_band(&backend, "old", 401).await;
    mount_band(&backend, "new", 200).await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(header("authorization", "Bearer old"))
        .and(body_json(serde_json::json!({"accessToken": "old"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"accessToken": "new"})),
        )
        .expect(1)
        .mount(&auth)
        .await;

    let credentials = Arc::new(InMemoryCredentialStore::with_token(token("old")));
    let (client, _dir) = context(&backend.uri(), &auth.uri(), credentials);

    assert!(client.bands.band(&band_id()).await.is_ok());
}

#[tokio::test]
async fn concurrent_calls_share_one_refresh() {
    let backend = MockServer::start().await;
    let auth = MockServer::start().await;

    mount_band(&backend, "old", 401).await;
    mount_band(&backend, "new", 200).await;
    mount_refresh(
        &auth,
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({"accessToken": "new"}))
            .set_delay(std::time::Duration::from_millis(100)),
        1,
    )
    .await;

    let credentials = Arc::new(InMemoryCredentialStore::with_token(token("old")));
    let (client, _dir) = context(&backend.uri(), &auth.uri(), credentials);

    let id = band_id();
    let (first, second, third) = futures::join!(
        client.bands.band(&id),
        client.bands.band(&id),
        client.bands.band(&id)
    );

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert!(third.is_ok());
}

#[tokio::test]
async fn replay_failure_is_returned_without_second_refresh() {
    let backend = MockServer::start().await;
    let auth = MockServer::start().await;

    mount_band(&backend, "old", 401).await;
    mount_band(&backend, "new", 401).await;
    mount_refresh(
        &auth,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"accessToken": "new"})),
        1,
    )
    .await;

    let credentials = Arc::new(InMemoryCredentialStore::with_token(token("old")));
    let (client, _dir) = context(&backend.uri(), &auth.uri(), credentials);

    let err = client.bands.band(&band_id()).await.unwrap_err();

    assert_eq!(err.backend_error().map(|e| e.status_code), Some(401));
    assert_eq!(backend.received_requests().await.unwrap().len(), 2);
}

// ---- Non-authorization failures pass through untouched ----

#[tokio::test]
async fn server_error_is_returned_verbatim_without_refresh() {
    let backend = MockServer::start().await;
    let auth = MockServer::start().await;

    let body = serde_json::json!({
        "statusCode": 500,
        "error": "Internal",
        "path": "/chat/1/history",
        "timestamp": "2025-05-01T12:00:00.000Z"
    });
    Mock::given(method("GET"))
        .and(path("/chat/1/history"))
        .respond_with(ResponseTemplate::new(500).set_body_json(body))
        .expect(1)
        .mount(&backend)
        .await;
    mount_refresh(&auth, ResponseTemplate::new(200), 0).await;

    let credentials = Arc::new(InMemoryCredentialStore::with_token(token("t1")));
    let (client, _dir) = context(&backend.uri(), &auth.uri(), credentials.clone());

    let err = client
        .chats
        .chat_history(&ChatId::new("1").unwrap())
        .await
        .unwrap_err();

    let backend_error = err.backend_error().expect("backend error");
    assert_eq!(backend_error.status_code, 500);
    assert_eq!(backend_error.error, "Internal");
    assert_eq!(backend_error.path, "/chat/1/history");
    assert_eq!(backend_error.timestamp, "2025-05-01T12:00:00.000Z");
    assert_eq!(credentials.get().await.unwrap(), Some(token("t1")));
}

#[tokio::test]
async fn forbidden_is_not_refreshed() {
    let backend = MockServer::start().await;
    let auth = MockServer::start().await;

    mount_band(&backend, "t1", 403).await;
    mount_refresh(&auth, ResponseTemplate::new(200), 0).await;

    let credentials = Arc::new(InMemoryCredentialStore::with_token(token("t1")));
    let (client, _dir) = context(&backend.uri(), &auth.uri(), credentials);

    let err = client.bands.band(&band_id()).await.unwrap_err();
    assert_eq!(err.backend_error().map(|e| e.status_code), Some(403));
}

#[tokio::test]
async fn unreachable_backend_is_transport_failure_without_refresh() {
    let auth = MockServer::start().await;
    mount_refresh(&auth, ResponseTemplate::new(200), 0).await;

    let unreachable = {
        let server = MockServer::builder().start().await;
        server.uri()
    };

    let credentials = Arc::new(InMemoryCredentialStore::with_token(token("t1")));
    let (client, _dir) = context(&unreachable, &auth.uri(), credentials.clone());

    let err = client.bands.my_bands().await.unwrap_err();

    assert!(err.is_transport_failure(), "{err}");
    assert_eq!(credentials.get().await.unwrap(), Some(token("t1")));
}

// ---- Rejected refresh ends the session ----

#[tokio::test]
async fn rejected_refresh_clears_session() {
    let backend = MockServer::start().await;
    let auth = MockServer::start().await;

    mount_band(&backend, "old", 401).await;
    mount_refresh(
        &auth,
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "statusCode": 401,
            "error": "Unauthorized",
            "path": "/auth/refresh",
            "timestamp": "2025-05-01T12:00:00.000Z"
        })),
        1,
    )
    .await;

    let credentials = Arc::new(InMemoryCredentialStore::with_token(token("old")));
    let (client, _dir) = context(&backend.uri(), &auth.uri(), credentials.clone());

    let err = client.bands.band(&band_id()).await.unwrap_err();

    assert!(matches!(err, ApplicationError::NotAuthorized(_)), "{err}");
    assert_eq!(credentials.get().await.unwrap(), None);
    assert!(!client.session.is_authenticated().await.unwrap());
    assert_eq!(backend.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unreachable_auth_service_keeps_session() {
    let backend = MockServer::start().await;
    mount_band(&backend, "old", 401).await;

    let unreachable = {
        let server = MockServer::builder().start().await;
        server.uri()
    };

    let credentials = Arc::new(InMemoryCredentialStore::with_token(token("old")));
    let (client, _dir) = context(&backend.uri(), &unreachable, credentials.clone());

    let err = client.bands.band(&band_id()).await.unwrap_err();

    assert!(err.is_transport_failure(), "{err}");
    assert_eq!(credentials.get().await.unwrap(), Some(token("old")));
}

// ---- Session lifecycle ----

#[tokio::test]
async fn login_then_calls_use_issued_credential() {
    let backend = MockServer::start().await;
    let auth = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({"email": "ana@gigbook.app", "password": "pw"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"accessToken": "t1"})),
        )
        .expect(1)
        .mount(&auth)
        .await;
    Mock::given(method("GET"))
        .and(path("/bands/user"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "b1", "name": "The Gigs"}
        ])))
        .expect(1)
        .mount(&backend)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&auth)
        .await;

    let credentials = Arc::new(InMemoryCredentialStore::new());
    let (client, _dir) = context(&backend.uri(), &auth.uri(), credentials.clone());

    let email = EmailAddress::new("ana@gigbook.app").unwrap();
    client.session.login(&email, "pw").await.unwrap();
    assert!(client.session.is_authenticated().await.unwrap());

    let bands = client.bands.my_bands().await.unwrap();
    assert_eq!(bands.len(), 1);

    client.session.logout().await.unwrap();
    assert_eq!(credentials.get().await.unwrap(), None);
}

#[tokio::test]
async fn persisted_session_survives_restart() {
    let backend = MockServer::start().await;
    let auth = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    mount_band(&backend, "old", 401).await;
    mount_band(&backend, "new", 200).await;
    mount_refresh(
        &auth,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"accessToken": "new"})),
        1,
    )
    .await;

    let storage = JsonSlotStorage::new(dir.path());
    let credentials = Arc::new(PersistedCredentialStore::new(storage.clone(), "web"));
    credentials.set(&token("old")).await.unwrap();

    let (client, _drafts_dir) = context(&backend.uri(), &auth.uri(), credentials);
    client.bands.band(&band_id()).await.unwrap();

    let reopened = PersistedCredentialStore::new(storage, "web");
    assert_eq!(reopened.get().await.unwrap(), Some(token("new")));
    assert!(dir.path().join("access_token_web.json").exists());
}

#[tokio::test]
async fn logout_removes_corrupt_persisted_credential() {
    let backend = MockServer::start().await;
    let auth = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&auth)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let slot = dir.path().join("access_token_web.json");
    std::fs::write(&slot, br#"{"accessToken":"  ","storedAt":"2025-01-01T00:00:00Z"}"#).unwrap();

    let credentials = Arc::new(PersistedCredentialStore::new(
        JsonSlotStorage::new(dir.path()),
        "web",
    ));
    let (client, _drafts_dir) = context(&backend.uri(), &auth.uri(), credentials);

    assert!(client.session.is_authenticated().await.is_err());

    client.session.logout().await.unwrap();

    assert!(!slot.exists());
    assert!(!client.session.is_authenticated().await.unwrap());
}
