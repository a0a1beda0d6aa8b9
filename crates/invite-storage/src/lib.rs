//! Invite Storage - client-local persistence
//!
//! Provides:
//! - `KeyValueStore`: injected get/set/remove interface
//! - `MemoryStore` and `FileStore` backends
//! - `CredentialStore`: the admin bearer token under `admin_token`
//! - `RsvpMirror`: append-only copy of submissions under `rsvps`
//!
//! Nothing here is a source of truth. The remote service owns the
//! authoritative response list.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod credential;
pub mod error;
pub mod kv;
pub mod mirror;

pub use credential::{CredentialStore, ADMIN_TOKEN_KEY};
pub use error::StorageError;
pub use kv::{FileStore, KeyValueStore, MemoryStore, SharedStore};
pub use mirror::{RsvpMirror, RSVPS_KEY};
