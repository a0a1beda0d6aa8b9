//! Admin aggregation view
//!
//! ```text
//! LoggedOut --login--> LoggingIn --ok--> LoggedIn --refresh--> LoggedIn
//!     ^                    |                 |
//!     +------failed--------+                 |
//!     +-------------logout / 401-------------+
//! ```
//!
//! Login is refused while a session is held; log out first.
//!
//! Fetch loading and fetch errors are tracked apart from authentication, so
//! a failed refresh leaves the admin logged in. A 401 is handled by the
//! transport layer, which clears the session; the view notices on its next
//! interaction and renders logged out without a message.

use crate::error::AdminError;
use invite_client::{ApiError, InviteApi, Session, Transport};
use invite_core::{AggregatedTotals, StoredResponse};
use std::sync::Arc;

/// Placeholder shown when a response carries no message
pub const NO_MESSAGE: &str = "—";

/// Authentication state of the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminState {
    LoggedOut,
    LoggingIn,
    LoggedIn,
}

impl AdminState {
    #[inline]
    #[must_use]
    pub fn is_logged_in(self) -> bool {
        self == Self::LoggedIn
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRow {
    pub name: String,
    pub attending: &'static str,
    pub people: u32,
    pub message: String,
}

impl From<&StoredResponse> for ResponseRow {
    fn from(response: &StoredResponse) -> Self {
        Self {
            name: response.name.clone(),
            attending: if response.is_accepted() { "Yes" } else { "No" },
            people: response.count.unwrap_or(0),
            message: response
                .message
                .clone()
                .unwrap_or_else(|| NO_MESSAGE.to_string()),
        }
    }
}

/// Passcode-gated response list with totals
#[derive(Debug)]
pub struct AdminView<T> {
    api: InviteApi<T>,
    session: Arc<Session>,
    state: AdminState,
    passcode: String,
    responses: Vec<StoredResponse>,
    login_error: Option<String>,
    fetch_error: Option<String>,
    loading: bool,
}

impl<T: Transport> AdminView<T> {
    /// Build the view; starts logged in when the session already holds a
    /// credential
    #[must_use]
    pub fn new(api: InviteApi<T>, session: Arc<Session>) -> Self {
        let state = if session.is_authenticated() {
            AdminState::LoggedIn
        } else {
            AdminState::LoggedOut
        };
        Self {
            api,
            session,
            state,
            passcode: String::new(),
            responses: Vec::new(),
            login_error: None,
            fetch_error: None,
            loading: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> AdminState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn passcode(&self) -> &str {
        &self.passcode
    }

    pub fn set_passcode(&mut self, passcode: impl Into<String>) {
        self.passcode = passcode.into();
    }

    #[inline]
    #[must_use]
    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    /// Whether a login or fetch is in flight
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Responses in retrieval order
    #[inline]
    #[must_use]
    pub fn responses(&self) -> &[StoredResponse] {
        &self.responses
    }

    /// Reconcile with the session
    ///
    /// Drops to `LoggedOut` (clearing the list) if the credential is gone.
    /// Returns whether the view is logged in afterwards.
    pub fn sync_session(&mut self) -> bool {
        if self.state.is_logged_in() && !self.session.is_authenticated() {
            tracing::info!("Admin session ended elsewhere, showing login");
            self.state = AdminState::LoggedOut;
            self.responses.clear();
            self.fetch_error = None;
        }
        self.state.is_logged_in()
    }

    /// Initial load when the view is shown
    ///
    /// # Errors
    /// Same as [`refresh`](Self::refresh); a logged-out view is a no-op.
    pub async fn open(&mut self) -> Result<(), AdminError> {
        if self.sync_session() {
            self.refresh().await
        } else {
            Ok(())
        }
    }

    /// Exchange the entered passcode for a session, then load responses
    ///
    /// A failed follow-up fetch does not fail the login; it is reported
    /// through [`fetch_error`](Self::fetch_error).
    ///
    /// # Errors
    /// `AdminError::AlreadyLoggedIn` or `AdminError::EmptyPasscode` without
    /// a network call, or `AdminError::Login` when the exchange fails.
    pub async fn login(&mut self) -> Result<(), AdminError> {
        // The stored bearer would ride along and a 401 would clear it
        if self.sync_session() {
            return Err(AdminError::AlreadyLoggedIn);
        }
        let passcode = self.passcode.trim().to_string();
        if passcode.is_empty() {
            let err = AdminError::EmptyPasscode;
            self.login_error = Some(err.to_string());
            return Err(err);
        }

        self.state = AdminState::LoggingIn;
        self.login_error = None;
        self.loading = true;
        let result = self.api.login(&passcode).await;
        self.loading = false;

        match result {
            Ok(token) => {
                self.session.establish(&token.access_token);
                self.state = AdminState::LoggedIn;
                self.passcode.clear();
                if let Err(e) = self.refresh().await {
                    tracing::warn!("Initial fetch after login failed: {}", e);
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Admin login failed: {}", e);
                self.state = AdminState::LoggedOut;
                self.login_error = Some(login_message(&e));
                Err(AdminError::Login(e))
            }
        }
    }

    /// Re-fetch the response list
    ///
    /// # Errors
    /// `AdminError::NotLoggedIn` without a session, or `AdminError::Fetch`.
    /// A fetch failing with 401 leaves the view logged out.
    pub async fn refresh(&mut self) -> Result<(), AdminError> {
        if !self.sync_session() {
            return Err(AdminError::NotLoggedIn);
        }

        self.loading = true;
        self.fetch_error = None;
        let result = self.api.list_responses().await;
        self.loading = false;

        match result {
            Ok(responses) => {
                tracing::info!("Loaded {} responses", responses.len());
                self.responses = responses;
                Ok(())
            }
            Err(e) if e.is_unauthorized() => {
                self.sync_session();
                Err(AdminError::Fetch(e))
            }
            Err(e) => {
                tracing::warn!("Could not load responses: {}", e);
                self.fetch_error = Some(e.user_message());
                Err(AdminError::Fetch(e))
            }
        }
    }

    /// End the session and drop the list
    pub fn logout(&mut self) {
        self.session.end();
        self.state = AdminState::LoggedOut;
        self.responses.clear();
        self.fetch_error = None;
        self.login_error = None;
    }

    /// Totals over the current list
    #[must_use]
    pub fn totals(&self) -> AggregatedTotals {
        AggregatedTotals::from_responses(&self.responses)
    }

    /// Table rows, newest first
    #[must_use]
    pub fn rows(&self) -> Vec<ResponseRow> {
        self.responses.iter().rev().map(ResponseRow::from).collect()
    }
}

fn login_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized { detail: None } => "Invalid passcode".to_string(),
        other => other.user_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invite_client::AuthLayer;
    use invite_test_utils::{memory_session, sample_responses, ScriptedTransport};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn view(
        transport: &ScriptedTransport,
        token: Option<&str>,
    ) -> AdminView<AuthLayer<ScriptedTransport>> {
        let (_kv, session) = memory_session(token);
        let api = InviteApi::new(AuthLayer::new(transport.clone(), session.clone()));
        AdminView::new(api, session)
    }

    #[tokio::test]
    async fn blank_passcode_no_request() {
        let transport = ScriptedTransport::new();
        let mut view = view(&transport, None);
        view.set_passcode("   ");

        let err = view.login().await.unwrap_err();
        assert!(matches!(err, AdminError::EmptyPasscode));
        assert_eq!(view.state(), AdminState::LoggedOut);
        assert_eq!(view.login_error(), Some("please enter the passcode"));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn restored_session_starts_logged_in() {
        let transport = ScriptedTransport::new();
        let view = view(&transport, Some("tok"));
        assert_eq!(view.state(), AdminState::LoggedIn);
    }

    #[tokio::test]
    async fn login_refused_while_session_held() {
        use invite_storage::{KeyValueStore, ADMIN_TOKEN_KEY};

        let transport = ScriptedTransport::new();
        transport.reply(401, json!({ "detail": "Invalid passcode" }));
        let (kv, session) = memory_session(Some("valid-tok"));
        let api = InviteApi::new(AuthLayer::new(transport.clone(), session.clone()));
        let mut view = AdminView::new(api, session.clone());
        view.set_passcode("wrong");

        let err = view.login().await.unwrap_err();
        assert!(matches!(err, AdminError::AlreadyLoggedIn));
        assert_eq!(transport.request_count(), 0);
        assert_eq!(view.state(), AdminState::LoggedIn);
        assert!(session.is_authenticated());
        assert_eq!(kv.get(ADMIN_TOKEN_KEY).unwrap().as_deref(), Some("valid-tok"));
    }

    #[tokio::test]
    async fn refresh_failure_keeps_login() {
        let transport = ScriptedTransport::new();
        transport.reply(500, json!({ "detail": "database unavailable" }));
        let mut view = view(&transport, Some("tok"));

        let err = view.refresh().await.unwrap_err();
        assert!(!err.ended_session());
        assert_eq!(view.state(), AdminState::LoggedIn);
        assert_eq!(view.fetch_error(), Some("database unavailable"));
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn rows_newest_first() {
        let transport = ScriptedTransport::new();
        transport.reply(200, serde_json::to_value(sample_responses()).unwrap());
        let mut view = view(&transport, Some("tok"));
        view.open().await.unwrap();

        let rows = view.rows();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Carol", "Alice"]);
        assert_eq!(rows[0].attending, "No");
        assert_eq!(rows[0].people, 0);
        assert_eq!(rows[0].message, NO_MESSAGE);
    }

    #[tokio::test]
    async fn logout_clears_list() {
        let transport = ScriptedTransport::new();
        transport.reply(200, serde_json::to_value(sample_responses()).unwrap());
        let mut view = view(&transport, Some("tok"));
        view.open().await.unwrap();
        assert_eq!(view.responses().len(), 3);

        view.logout();
        assert_eq!(view.state(), AdminState::LoggedOut);
        assert!(view.responses().is_empty());
        assert!(matches!(
            view.refresh().await,
            Err(AdminError::NotLoggedIn)
        ));
    }

    #[test]
    fn login_message_falls_back() {
        assert_eq!(
            login_message(&ApiError::Unauthorized { detail: None }),
            "Invalid passcode"
        );
        assert_eq!(
            login_message(&ApiError::Unauthorized {
                detail: Some("Wrong code".to_string())
            }),
            "Wrong code"
        );
    }
}
