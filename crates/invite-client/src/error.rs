//! Error types for the HTTP adapter
//!
//! Failures surface verbatim to the caller. Nothing here is retried.

/// Remote call failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401 from the remote service
    #[error("not authorized{}", detail_suffix(.detail))]
    Unauthorized { detail: Option<String> },

    /// Any other non-success status
    #[error("request failed with status code {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    /// Network unreachable, connection reset, bad URL
    #[error("network error: {0}")]
    Transport(String),

    /// Response body did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

impl ApiError {
    /// Build the error for a non-success status
    #[must_use]
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        if status == 401 {
            Self::Unauthorized { detail }
        } else {
            Self::Status { status, detail }
        }
    }

    /// Check if the remote rejected the credential
    #[inline]
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Message suitable for showing to a guest or the admin
    ///
    /// Prefers the server's own explanation when it sent one.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized {
                detail: Some(detail),
            }
            | Self::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Transport(_) => {
                "Could not reach the server. Please check your connection and try again."
                    .to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
