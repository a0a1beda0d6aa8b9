//! Credential decorator around a transport
//!
//! Every request gets the session's bearer token when one is held. Every
//! 401 response clears the session before it reaches the caller.

use crate::error::ApiError;
use crate::session::Session;
use crate::transport::{ApiRequest, ApiResponse, Transport};
use async_trait::async_trait;
use std::sync::Arc;

/// Bearer-attaching, 401-clearing transport decorator
#[derive(Debug, Clone)]
pub struct AuthLayer<T> {
    inner: T,
    session: Arc<Session>,
}

impl<T: Transport> AuthLayer<T> {
    /// Wrap a transport
    #[inline]
    #[must_use]
    pub fn new(inner: T, session: Arc<Session>) -> Self {
        Self { inner, session }
    }

    /// Session this layer reads and clears
    #[inline]
    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Wrapped transport
    #[inline]
    #[must_use]
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: Transport> Transport for AuthLayer<T> {
    async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        if let Some(token) = self.session.credential() {
            request.bearer = Some(token);
        }

        let path = request.path.clone();
        let response = self.inner.send(request).await?;
        if response.is_unauthorized() {
            tracing::debug!("401 on {}, clearing credential", path);
            self.session.invalidate();
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use invite_storage::{CredentialStore, KeyValueStore, MemoryStore, ADMIN_TOKEN_KEY};
    use mockall::predicate::function;

    fn session_with(kv: &Arc<MemoryStore>, token: Option<&str>) -> Arc<Session> {
        if let Some(token) = token {
            kv.set(ADMIN_TOKEN_KEY, token).unwrap();
        }
        Arc::new(Session::restore(CredentialStore::new(kv.clone())))
    }

    #[tokio::test]
    async fn attaches_bearer_when_present() {
        let kv = Arc::new(MemoryStore::new());
        let session = session_with(&kv, Some("tok-1"));

        let mut inner = MockTransport::new();
        inner
            .expect_send()
            .with(function(|r: &ApiRequest| r.bearer.as_deref() == Some("tok-1")))
            .times(1)
            .returning(|_| Ok(ApiResponse::new(200, "[]")));

        let layer = AuthLayer::new(inner, session);
        let resp = layer.send(ApiRequest::get("/users/")).await.unwrap();
        assert!(resp.is_success());
    }

    #[tokio::test]
    async fn no_bearer_without_session() {
        let kv = Arc::new(MemoryStore::new());
        let session = session_with(&kv, None);

        let mut inner = MockTransport::new();
        inner
            .expect_send()
            .with(function(|r: &ApiRequest| r.bearer.is_none()))
            .times(1)
            .returning(|_| Ok(ApiResponse::new(200, "{}")));

        let layer = AuthLayer::new(inner, session);
        layer
            .send(ApiRequest::post("/users/", serde_json::json!({})))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unauthorized_clears_session_on_any_call() {
        let kv = Arc::new(MemoryStore::new());
        let session = session_with(&kv, Some("expired"));

        let mut inner = MockTransport::new();
        inner
            .expect_send()
            .times(1)
            .returning(|_| Ok(ApiResponse::new(401, r#"{"detail": "Token expired"}"#)));

        let layer = AuthLayer::new(inner, session.clone());
        // Not the login call
        let resp = layer
            .send(ApiRequest::post("/users/", serde_json::json!({"name": "x"})))
            .await
            .unwrap();

        assert!(resp.is_unauthorized());
        assert!(!session.is_authenticated());
        assert_eq!(kv.get(ADMIN_TOKEN_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn other_failures_keep_session() {
        let kv = Arc::new(MemoryStore::new());
        let session = session_with(&kv, Some("tok"));

        let mut inner = MockTransport::new();
        inner
            .expect_send()
            .times(2)
            .returning(|r| {
                if r.path == "/boom" {
                    Err(ApiError::Transport("connection reset".to_string()))
                } else {
                    Ok(ApiResponse::new(500, ""))
                }
            });

        let layer = AuthLayer::new(inner, session.clone());
        layer.send(ApiRequest::get("/users/")).await.unwrap();
        assert!(layer.send(ApiRequest::get("/boom")).await.is_err());
        assert!(session.is_authenticated());
    }
}
