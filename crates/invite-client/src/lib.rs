//! Invite Client - HTTP adapter for the remote RSVP service
//!
//! Layers, leaf first:
//! - `Transport`: one request/response round trip (`HttpTransport` uses reqwest)
//! - `AuthLayer`: attaches the session bearer token and clears the session
//!   on any 401, whichever call produced it
//! - `InviteApi`: typed create/list/login operations
//!
//! No layer retries, queues or batches.
//!
//! # Example
//!
//! ```rust,ignore
//! use invite_client::{InviteApi, Session};
//! use invite_storage::{CredentialStore, MemoryStore};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), invite_client::ApiError> {
//! let session = Arc::new(Session::restore(CredentialStore::new(Arc::new(MemoryStore::new()))));
//! let api = InviteApi::connect("http://localhost:8000", session.clone())?;
//! let token = api.login("admin123").await?;
//! session.establish(&token.access_token);
//! let responses = api.list_responses().await?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod api;
pub mod auth;
pub mod error;
pub mod session;
pub mod transport;

pub use api::{InviteApi, ADMIN_LOGIN_PATH, USERS_PATH};
pub use auth::AuthLayer;
pub use error::ApiError;
pub use session::Session;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
