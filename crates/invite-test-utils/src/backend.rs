//! In-process fake of the remote RSVP service
//!
//! Serves the three endpoints the client uses over real HTTP on loopback,
//! so the reqwest transport is exercised end to end.

use invite_core::{CreatedResponse, LoginRequest, RsvpRecord, StoredResponse, TokenResponse};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Reply};

#[derive(Debug, Default)]
struct BackendState {
    passcode: String,
    users: Vec<StoredResponse>,
    tokens: HashSet<String>,
}

type SharedState = Arc<Mutex<BackendState>>;

/// Running fake backend; shuts down on drop
#[derive(Debug)]
pub struct FakeBackend {
    addr: SocketAddr,
    state: SharedState,
    shutdown: Option<oneshot::Sender<()>>,
}

impl FakeBackend {
    /// Bind an ephemeral loopback port and start serving
    pub async fn spawn(passcode: &str) -> Self {
        let state: SharedState = Arc::new(Mutex::new(BackendState {
            passcode: passcode.to_string(),
            ..BackendState::default()
        }));

        let (tx, rx) = oneshot::channel::<()>();
        let (addr, server) = warp::serve(routes(state.clone())).bind_with_graceful_shutdown(
            ([127, 0, 0, 1], 0),
            async {
                rx.await.ok();
            },
        );
        tokio::spawn(server);

        Self {
            addr,
            state,
            shutdown: Some(tx),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stored responses in insertion order
    pub fn users(&self) -> Vec<StoredResponse> {
        self.state.lock().users.clone()
    }

    /// Pre-load responses
    pub fn seed(&self, users: Vec<StoredResponse>) {
        self.state.lock().users.extend(users);
    }

    /// Simulate every issued token expiring
    pub fn revoke_all_tokens(&self) {
        self.state.lock().tokens.clear();
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

fn with_state(
    state: SharedState,
) -> impl Filter<Extract = (SharedState,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || state.clone())
}

fn detail(status: StatusCode, message: &str) -> Response {
    warp::reply::with_status(
        warp::reply::json(&serde_json::json!({ "detail": message })),
        status,
    )
    .into_response()
}

fn routes(
    state: SharedState,
) -> impl Filter<Extract = (Response,), Error = warp::Rejection> + Clone {
    let create = warp::post()
        .and(warp::path("users"))
        .and(warp::path::end())
        .and(warp::body::json())
        .and(with_state(state.clone()))
        .map(|record: RsvpRecord, state: SharedState| {
            let id = uuid::Uuid::new_v4().to_string();
            state.lock().users.push(StoredResponse {
                id: id.clone(),
                name: record.name.clone(),
                status: record.status,
                count: record.count,
                message: record.message.clone(),
            });
            warp::reply::json(&CreatedResponse {
                inserted_id: id,
                user: record,
            })
            .into_response()
        });

    let list = warp::get()
        .and(warp::path("users"))
        .and(warp::path::end())
        .and(warp::header::optional::<String>("authorization"))
        .and(with_state(state.clone()))
        .map(|auth: Option<String>, state: SharedState| {
            let state = state.lock();
            let authorized = auth
                .as_deref()
                .and_then(|h| h.strip_prefix("Bearer "))
                .is_some_and(|token| state.tokens.contains(token));
            if authorized {
                warp::reply::json(&state.users).into_response()
            } else {
                detail(StatusCode::UNAUTHORIZED, "Invalid or expired token")
            }
        });

    let login = warp::post()
        .and(warp::path!("admin" / "login"))
        .and(warp::body::json())
        .and(with_state(state))
        .map(|req: LoginRequest, state: SharedState| {
            let mut state = state.lock();
            if req.passcode != state.passcode {
                return detail(StatusCode::UNAUTHORIZED, "Invalid passcode");
            }
            let token = uuid::Uuid::new_v4().to_string();
            state.tokens.insert(token.clone());
            warp::reply::json(&TokenResponse {
                access_token: token,
                token_type: "bearer".to_string(),
            })
            .into_response()
        });

    create.or(list).unify().or(login).unify()
}
