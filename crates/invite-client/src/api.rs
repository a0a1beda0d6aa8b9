//! Typed operations against the remote RSVP service

use crate::auth::AuthLayer;
use crate::error::ApiError;
use crate::session::Session;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
use invite_core::{CreatedResponse, LoginRequest, RsvpRecord, StoredResponse, TokenResponse};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Collection path for RSVP records
pub const USERS_PATH: &str = "/users/";
/// Passcode exchange path
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// Remote RSVP service client
#[derive(Debug, Clone)]
pub struct InviteApi<T> {
    transport: T,
}

impl InviteApi<AuthLayer<HttpTransport>> {
    /// Production stack: reqwest transport behind the credential layer
    ///
    /// # Errors
    /// `ApiError::Transport` if the HTTP client cannot be built.
    pub fn connect(base_url: &str, session: Arc<Session>) -> Result<Self, ApiError> {
        let http = HttpTransport::new(base_url)?;
        Ok(Self::new(AuthLayer::new(http, session)))
    }
}

impl<T: Transport> InviteApi<T> {
    /// Wrap a transport
    #[inline]
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Underlying transport
    #[inline]
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Persist one RSVP
    ///
    /// # Errors
    /// Any transport, status or decode failure.
    pub async fn create_response(&self, record: &RsvpRecord) -> Result<CreatedResponse, ApiError> {
        let body = serde_json::to_value(record)?;
        let response = self
            .transport
            .send(ApiRequest::post(USERS_PATH, body))
            .await?;
        let created: CreatedResponse = decode(&response)?;
        tracing::info!("RSVP stored with id {}", created.inserted_id);
        Ok(created)
    }

    /// All stored RSVPs, in the service's order
    ///
    /// # Errors
    /// `ApiError::Unauthorized` without a valid credential, or any transport,
    /// status or decode failure.
    pub async fn list_responses(&self) -> Result<Vec<StoredResponse>, ApiError> {
        let response = self.transport.send(ApiRequest::get(USERS_PATH)).await?;
        let list: Vec<StoredResponse> = decode(&response)?;
        tracing::debug!("Fetched {} responses", list.len());
        Ok(list)
    }

    /// Exchange the shared passcode for a bearer credential
    ///
    /// Does not touch the session; the caller decides what to do with the
    /// token.
    ///
    /// # Errors
    /// `ApiError::Unauthorized` for a wrong passcode, or any transport,
    /// status or decode failure.
    pub async fn login(&self, passcode: &str) -> Result<TokenResponse, ApiError> {
        let body = serde_json::to_value(LoginRequest {
            passcode: passcode.to_string(),
        })?;
        let response = self
            .transport
            .send(ApiRequest::post(ADMIN_LOGIN_PATH, body))
            .await?;
        decode(&response)
    }
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    if !response.is_success() {
        return Err(ApiError::from_status(response.status, response.detail()));
    }
    Ok(serde_json::from_str(&response.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockTransport, Method};
    use mockall::predicate::function;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_posts_record() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .with(function(|r: &ApiRequest| {
                r.method == Method::Post
                    && r.path == USERS_PATH
                    && r.body
                        == Some(serde_json::json!({
                            "name": "Alice", "status": 1, "count": 3, "message": null
                        }))
            }))
            .times(1)
            .returning(|_| {
                Ok(ApiResponse::new(
                    200,
                    r#"{"inserted_id": "abc", "user": {"name": "Alice", "status": 1, "count": 3, "message": null}}"#,
                ))
            });

        let api = InviteApi::new(transport);
        let record = RsvpRecord {
            name: "Alice".to_string(),
            status: 1,
            count: Some(3),
            message: None,
        };
        let created = api.create_response(&record).await.unwrap();
        assert_eq!(created.inserted_id, "abc");
        assert_eq!(created.user, record);
    }

    #[tokio::test]
    async fn list_decodes_array() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(1).returning(|_| {
            Ok(ApiResponse::new(
                200,
                r#"[{"id": "1", "name": "A", "status": 1, "count": 2}, {"id": "2", "name": "B", "status": 0}]"#,
            ))
        });

        let list = InviteApi::new(transport).list_responses().await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].count, None);
    }

    #[tokio::test]
    async fn login_wrong_passcode() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .with(function(|r: &ApiRequest| {
                r.path == ADMIN_LOGIN_PATH
                    && r.body == Some(serde_json::json!({"passcode": "nope"}))
            }))
            .times(1)
            .returning(|_| Ok(ApiResponse::new(401, r#"{"detail": "Invalid passcode"}"#)));

        let err = InviteApi::new(transport).login("nope").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Unauthorized {
                detail: Some("Invalid passcode".to_string())
            }
        );
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(ApiResponse::new(200, "<html>")));

        let err = InviteApi::new(transport).list_responses().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn transport_failure_surfaces_verbatim() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(ApiError::Transport("dns failure".to_string())));

        let err = InviteApi::new(transport).list_responses().await.unwrap_err();
        assert_eq!(err, ApiError::Transport("dns failure".to_string()));
    }
}
