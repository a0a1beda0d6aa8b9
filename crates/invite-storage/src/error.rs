//! Error types for local storage

use std::path::PathBuf;

/// Errors from a key-value backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// IO error on the backing file
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored value is not the expected JSON
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Write would exceed the backend's quota
    #[error("storage quota exceeded (limit: {limit} bytes)")]
    QuotaExceeded { limit: usize },
}

impl StorageError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if the failure is a quota limit
    #[inline]
    #[must_use]
    pub fn is_quota(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_display() {
        let err = StorageError::QuotaExceeded { limit: 64 };
        assert_eq!(err.to_string(), "storage quota exceeded (limit: 64 bytes)");
        assert!(err.is_quota());
    }

    #[test]
    fn serde_conversion() {
        let parse: Result<Vec<u8>, _> = serde_json::from_str("not json");
        let err: StorageError = parse.unwrap_err().into();
        assert!(matches!(err, StorageError::Serde(_)));
        assert!(!err.is_quota());
    }
}
