//! Admin session state
//!
//! The session is read from the credential store once, at construction,
//! and from then on lives in memory. It changes only through
//! `establish`, `end` and `invalidate`; storage is written through on each.

use invite_storage::CredentialStore;
use parking_lot::RwLock;

/// In-memory admin session backed by the credential store
#[derive(Debug)]
pub struct Session {
    credentials: CredentialStore,
    token: RwLock<Option<String>>,
}

impl Session {
    /// Seed the session from persisted state
    ///
    /// An unreadable store starts the session logged out.
    #[must_use]
    pub fn restore(credentials: CredentialStore) -> Self {
        let token = credentials.token().unwrap_or_else(|e| {
            tracing::warn!("Could not read stored credential: {}", e);
            None
        });
        if token.is_some() {
            tracing::info!("Restored admin session from storage");
        }
        Self {
            credentials,
            token: RwLock::new(token),
        }
    }

    /// Current bearer credential
    #[inline]
    #[must_use]
    pub fn credential(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Whether a credential is held
    #[inline]
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Start a session after a successful passcode exchange
    ///
    /// The in-memory session is set even if persisting fails; the admin
    /// stays logged in until the process exits.
    pub fn establish(&self, token: &str) {
        *self.token.write() = Some(token.to_string());
        if let Err(e) = self.credentials.save_token(token) {
            tracing::warn!("Could not persist credential: {}", e);
        }
        tracing::info!("Admin session established");
    }

    /// Explicit logout
    pub fn end(&self) {
        self.clear();
        tracing::info!("Admin logged out");
    }

    /// Forced clear after the remote service rejected the credential
    pub fn invalidate(&self) {
        if self.clear() {
            tracing::warn!("Credential rejected by server, session cleared");
        }
    }

    /// Returns whether a credential was held
    fn clear(&self) -> bool {
        let had = self.token.write().take().is_some();
        if let Err(e) = self.credentials.remove_token() {
            tracing::warn!("Could not remove stored credential: {}", e);
        }
        had
    }
}
