//! Testing utilities for the invite workspace
//!
//! Shared test helpers, fixtures and fakes.

#![allow(missing_docs)]

pub mod backend;

pub use backend::FakeBackend;

use async_trait::async_trait;
use invite_client::{ApiError, ApiRequest, ApiResponse, Session, Transport};
use invite_core::{AggregatedTotals, StoredResponse};
use invite_storage::{CredentialStore, KeyValueStore, MemoryStore, StorageError};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Transport that replays scripted replies and records every request
///
/// Clones share the script and the log, so a test can keep one handle
/// while another is moved into the code under test.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply with status and JSON body
    pub fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.replies
            .lock()
            .push_back(Ok(ApiResponse::new(status, body.to_string())));
        self
    }

    /// Queue a transport failure
    pub fn fail(&self, message: &str) -> &Self {
        self.replies
            .lock()
            .push_back(Err(ApiError::Transport(message.to_string())));
        self
    }

    /// Requests seen so far
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().push(request);
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_string())))
    }
}

/// Store whose writes always fail with a quota error
#[derive(Debug, Default)]
pub struct FullStore;

impl KeyValueStore for FullStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::QuotaExceeded { limit: 0 })
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Fresh memory store and a session seeded from it
pub fn memory_session(token: Option<&str>) -> (Arc<MemoryStore>, Arc<Session>) {
    let kv = Arc::new(MemoryStore::new());
    if let Some(token) = token {
        CredentialStore::new(kv.clone()).save_token(token).unwrap();
    }
    let session = Arc::new(Session::restore(CredentialStore::new(kv.clone())));
    (kv, session)
}

pub fn stored(id: &str, name: &str, status: i32, count: Option<u32>) -> StoredResponse {
    StoredResponse {
        id: id.to_string(),
        name: name.to_string(),
        status,
        count,
        message: None,
    }
}

/// Two accepted (2 + 1 guests) and one declined
pub fn sample_responses() -> Vec<StoredResponse> {
    vec![
        stored("1", "Alice", 1, Some(2)),
        stored("2", "Carol", 1, Some(1)),
        stored("3", "Bob", 0, None),
    ]
}

pub fn sample_totals() -> AggregatedTotals {
    AggregatedTotals {
        yes: 2,
        no: 1,
        total_attendees: 3,
    }
}
