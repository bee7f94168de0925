//! End-to-end tests for the login submission flow

#![cfg(not(target_arch = "wasm32"))]

use rota_client::{LoginFlow, PortalClient};
use rota_core::login::{MISSING_INPUT_MESSAGE, NETWORK_ERROR_MESSAGE, REJECTED_FALLBACK_MESSAGE};
use rota_core::{
    KeyValueStorage, LoginError, LoginForm, MemoryStorage, RecordingNavigator, Role, RouteConfig,
    Session, SessionStore, StorageError, StorageKeys, StorageResult,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type TestFlow = LoginFlow<PortalClient, MemoryStorage, RecordingNavigator>;

fn flow(base_url: &str) -> (TestFlow, MemoryStorage, RecordingNavigator) {
    let storage = MemoryStorage::new();
    let navigator = RecordingNavigator::at("/");
    let flow = LoginFlow::new(
        PortalClient::new(base_url).unwrap(),
        SessionStore::new(storage.clone(), StorageKeys::default()),
        navigator.clone(),
        RouteConfig::default(),
    );
    (flow, storage, navigator)
}

/// Memory storage that refuses writes and removals for some keys
#[derive(Clone)]
struct LockedKeys {
    inner: MemoryStorage,
    locked: Vec<&'static str>,
}

impl LockedKeys {
    fn new(locked: &[&'static str]) -> Self {
        Self {
            inner: MemoryStorage::new(),
            locked: locked.to_vec(),
        }
    }
}

impl KeyValueStorage for LockedKeys {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.locked.contains(&key) {
            return Err(StorageError::write(key, "quota"));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        if self.locked.contains(&key) {
            return Err(StorageError::remove(key, "quota"));
        }
        self.inner.remove(key)
    }
}

fn locked_flow(
    base_url: &str,
    locked: &[&'static str],
) -> (
    LoginFlow<PortalClient, LockedKeys, RecordingNavigator>,
    LockedKeys,
    RecordingNavigator,
) {
    let storage = LockedKeys::new(locked);
    let navigator = RecordingNavigator::at("/");
    let flow = LoginFlow::new(
        PortalClient::new(base_url).unwrap(),
        SessionStore::new(storage.clone(), StorageKeys::default()),
        navigator.clone(),
        RouteConfig::default(),
    );
    (flow, storage, navigator)
}

async fn backend(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_admin_login_persists_session_and_opens_admin_dashboard() {
    let server = backend(200, json!({"access_token": "admin-token"})).await;
    let (flow, storage, navigator) = flow(&server.uri());

    let session = flow
        .submit(&LoginForm::new("root", "pw").with_role(Role::Admin))
        .await
        .unwrap();

    assert_eq!(session, Session::new("admin-token", Role::Admin));
    assert_eq!(storage.get("token").unwrap().as_deref(), Some("admin-token"));
    assert_eq!(storage.get("userType").unwrap().as_deref(), Some("admin"));
    assert_eq!(navigator.history(), vec!["/admin/dashboard".to_string()]);
}

#[tokio::test]
async fn test_staff_login_opens_staff_dashboard() {
    let server = backend(200, json!({"access_token": "staff-token"})).await;
    let (flow, storage, navigator) = flow(&server.uri());

    flow.submit(&LoginForm::new("bob", "pw").with_role(Role::Staff))
        .await
        .unwrap();

    assert_eq!(storage.get("userType").unwrap().as_deref(), Some("staff"));
    assert_eq!(navigator.last().as_deref(), Some("/staff/dashboard"));
}

#[tokio::test]
async fn test_form_without_role_logs_in_as_staff() {
    let server = backend(200, json!({"access_token": "t"})).await;
    let (flow, _storage, navigator) = flow(&server.uri());

    let session = flow.submit(&LoginForm::new("bob", "pw")).await.unwrap();

    assert_eq!(session.role, Some(Role::Staff));
    assert_eq!(navigator.last().as_deref(), Some("/staff/dashboard"));
}

#[tokio::test]
async fn test_empty_fields_never_reach_the_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "t"})))
        .expect(0)
        .mount(&server)
        .await;
    let (flow, storage, navigator) = flow(&server.uri());

    for form in [LoginForm::new("", "pw"), LoginForm::new("bob", "")] {
        let err = flow.submit(&form).await.unwrap_err();
        assert!(matches!(err, LoginError::MissingInput { .. }));
        assert_eq!(err.user_message(), MISSING_INPUT_MESSAGE);
    }

    assert!(storage.is_empty());
    assert!(navigator.history().is_empty());
}

#[tokio::test]
async fn test_ok_without_token_persists_nothing() {
    let server = backend(200, json!({"status": "ok"})).await;
    let (flow, storage, navigator) = flow(&server.uri());

    let err = flow
        .submit(&LoginForm::new("bob", "pw").with_role(Role::Admin))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), REJECTED_FALLBACK_MESSAGE);
    assert!(storage.is_empty());
    assert!(navigator.history().is_empty());
}

#[tokio::test]
async fn test_rejected_credentials_surface_backend_message() {
    let server = backend(401, json!({"msg": "Invalid credentials"})).await;
    let (flow, storage, navigator) = flow(&server.uri());

    let err = flow
        .submit(&LoginForm::new("bob", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        LoginError::Rejected {
            status: 401,
            message: "Invalid credentials".into()
        }
    );
    assert!(storage.is_empty());
    assert!(navigator.history().is_empty());
}

#[tokio::test]
async fn test_network_failure_shows_connectivity_error() {
    let (flow, storage, navigator) = flow("http://127.0.0.1:1");

    let err = flow.submit(&LoginForm::new("bob", "pw")).await.unwrap_err();

    assert!(matches!(err, LoginError::Network(_)));
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
    assert!(storage.is_empty());
    assert!(navigator.history().is_empty());
}

#[tokio::test]
async fn test_sign_out_clears_session_and_returns_to_login() {
    let server = backend(200, json!({"access_token": "t"})).await;
    let (flow, storage, navigator) = flow(&server.uri());

    flow.submit(&LoginForm::new("bob", "pw")).await.unwrap();
    flow.sign_out().unwrap();

    assert!(storage.is_empty());
    assert_eq!(flow.store().load(), None);
    assert_eq!(navigator.last().as_deref(), Some("/"));
}

#[tokio::test]
async fn test_failed_role_write_leaves_no_token() {
    let server = backend(200, json!({"access_token": "tok"})).await;
    let (flow, storage, navigator) = locked_flow(&server.uri(), &["userType"]);

    let err = flow
        .submit(&LoginForm::new("root", "pw").with_role(Role::Admin))
        .await
        .unwrap_err();

    assert_eq!(err, LoginError::Storage(StorageError::write("userType", "quota")));
    assert_eq!(storage.get("token").unwrap(), None);
    assert_eq!(flow.store().load(), None);
    assert!(navigator.history().is_empty());
}

#[tokio::test]
async fn test_failed_token_write_rolls_back_role_marker() {
    let server = backend(200, json!({"access_token": "tok"})).await;
    let (flow, storage, navigator) = locked_flow(&server.uri(), &["token"]);

    let err = flow
        .submit(&LoginForm::new("bob", "pw").with_role(Role::Staff))
        .await
        .unwrap_err();

    assert_eq!(err, LoginError::Storage(StorageError::write("token", "quota")));
    assert!(storage.inner.is_empty());
    assert_eq!(flow.store().load(), None);
    assert!(navigator.history().is_empty());
}
