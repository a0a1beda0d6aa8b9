//! Credential handling through the full client stack

use async_trait::async_trait;
use invite_client::{
    ApiError, ApiRequest, ApiResponse, AuthLayer, InviteApi, Session, Transport,
};
use invite_core::{Attendance, RsvpForm};
use invite_storage::{CredentialStore, KeyValueStore, MemoryStore, ADMIN_TOKEN_KEY};
use parking_lot::Mutex;
use std::sync::Arc;

/// Answers every request with one fixed status and records bearers
#[derive(Debug, Clone)]
struct FixedStatus {
    status: u16,
    body: &'static str,
    bearers: Arc<Mutex<Vec<Option<String>>>>,
}

impl FixedStatus {
    fn new(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            bearers: Arc::default(),
        }
    }
}

#[async_trait]
impl Transport for FixedStatus {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.bearers.lock().push(request.bearer);
        Ok(ApiResponse::new(self.status, self.body))
    }
}

fn stack(
    status: u16,
    body: &'static str,
) -> (
    Arc<MemoryStore>,
    Arc<Session>,
    FixedStatus,
    InviteApi<AuthLayer<FixedStatus>>,
) {
    let kv = Arc::new(MemoryStore::new());
    kv.set(ADMIN_TOKEN_KEY, "stale").unwrap();
    let session = Arc::new(Session::restore(CredentialStore::new(kv.clone())));
    let inner = FixedStatus::new(status, body);
    let api = InviteApi::new(AuthLayer::new(inner.clone(), session.clone()));
    (kv, session, inner, api)
}

#[tokio::test]
async fn unauthorized_create_also_clears_credential() {
    let (kv, session, inner, api) = stack(401, r#"{"detail":"Invalid or expired token"}"#);
    let record = RsvpForm::new("Alice")
        .with_attendance(Attendance::Yes)
        .validate()
        .unwrap()
        .to_record();

    let err = api.create_response(&record).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Invalid or expired token");
    assert!(!session.is_authenticated());
    assert_eq!(kv.get(ADMIN_TOKEN_KEY).unwrap(), None);
    assert_eq!(*inner.bearers.lock(), vec![Some("stale".to_string())]);

    // next call goes out without a bearer
    let _ = api.list_responses().await;
    assert_eq!(inner.bearers.lock()[1], None);
}

#[tokio::test]
async fn server_error_keeps_credential() {
    let (kv, session, _inner, api) = stack(503, "");
    let err = api.list_responses().await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 503, detail: None });
    assert!(session.is_authenticated());
    assert_eq!(kv.get(ADMIN_TOKEN_KEY).unwrap().as_deref(), Some("stale"));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let (_kv, session, _inner, api) = stack(200, "not json");
    let err = api.list_responses().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(session.is_authenticated());
}
