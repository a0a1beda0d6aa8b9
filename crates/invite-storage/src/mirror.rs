//! Local mirror of submitted RSVPs
//!
//! Append-only JSON array under `rsvps`. Never reconciled against the
//! remote list.

use crate::error::StorageError;
use crate::kv::SharedStore;
use invite_core::MirrorEntry;

/// Storage key for mirrored submissions
pub const RSVPS_KEY: &str = "rsvps";

/// Best-effort local copy of submissions
#[derive(Debug, Clone)]
pub struct RsvpMirror {
    store: SharedStore,
}

impl RsvpMirror {
    /// Wrap a key-value store
    #[inline]
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All mirrored entries in submission order
    ///
    /// # Errors
    /// Backend failure or a stored value that is not an entry list.
    pub fn entries(&self) -> Result<Vec<MirrorEntry>, StorageError> {
        match self.store.get(RSVPS_KEY)? {
            Some(text) if !text.trim().is_empty() => Ok(serde_json::from_str(&text)?),
            _ => Ok(Vec::new()),
        }
    }

    /// Append one entry, returning the new length
    ///
    /// # Errors
    /// Backend failure (including quota), or an unreadable existing list.
    pub fn append(&self, entry: MirrorEntry) -> Result<usize, StorageError> {
        let mut entries = self.entries()?;
        entries.push(entry);
        let text = serde_json::to_string(&entries)?;
        self.store.set(RSVPS_KEY, &text)?;
        Ok(entries.len())
    }
}
