//! Admin credential persistence

use crate::error::StorageError;
use crate::kv::SharedStore;

/// Storage key for the bearer token
pub const ADMIN_TOKEN_KEY: &str = "admin_token";

/// Persists the opaque admin bearer token
#[derive(Debug, Clone)]
pub struct CredentialStore {
    store: SharedStore,
}

impl CredentialStore {
    /// Wrap a key-value store
    #[inline]
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Save the token
    pub fn save_token(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(ADMIN_TOKEN_KEY, token)
    }

    /// Read the token; an empty stored string counts as absent
    pub fn token(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .store
            .get(ADMIN_TOKEN_KEY)?
            .filter(|t| !t.is_empty()))
    }

    /// Delete the token
    pub fn remove_token(&self) -> Result<(), StorageError> {
        self.store.remove(ADMIN_TOKEN_KEY)
    }

    /// Whether a token is stored; unreadable storage counts as no token
    #[must_use]
    pub fn has_token(&self) -> bool {
        matches!(self.token(), Ok(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    #[test]
    fn save_read_remove() {
        let kv = Arc::new(MemoryStore::new());
        let creds = CredentialStore::new(kv.clone());

        assert!(!creds.has_token());
        creds.save_token("tok-1").unwrap();
        assert!(creds.has_token());
        assert_eq!(creds.token().unwrap().as_deref(), Some("tok-1"));
        assert_eq!(kv.get(ADMIN_TOKEN_KEY).unwrap().as_deref(), Some("tok-1"));

        creds.remove_token().unwrap();
        assert!(!creds.has_token());
        assert_eq!(kv.get(ADMIN_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn empty_token_is_absent() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(ADMIN_TOKEN_KEY, "").unwrap();
        let creds = CredentialStore::new(kv);
        assert_eq!(creds.token().unwrap(), None);
        assert!(!creds.has_token());
    }
}
