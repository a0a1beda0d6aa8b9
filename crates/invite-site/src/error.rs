//! Error types for the site views
//!
//! All of these are recoverable: every view is back in an interactive
//! state when one is returned.

use crate::rsvp::RsvpStage;
use invite_client::ApiError;
use invite_core::ValidationError;

/// RSVP flow errors
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Form failed validation; nothing was sent
    #[error("invalid RSVP: {0}")]
    Validation(#[from] ValidationError),

    /// Remote create failed; the form is intact and can be resent
    #[error("submission failed: {0}")]
    Api(#[from] ApiError),

    /// Action not available in the current stage
    #[error("not available while {0}")]
    WrongStage(RsvpStage),
}

impl FlowError {
    /// Whether confirming again may succeed
    #[inline]
    #[must_use]
    pub fn can_resubmit(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

/// Admin view errors
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// Blank passcode; nothing was sent
    #[error("please enter the passcode")]
    EmptyPasscode,

    /// A session is already held; log out before logging in again
    #[error("already logged in")]
    AlreadyLoggedIn,

    /// Passcode exchange failed
    #[error("login failed: {0}")]
    Login(ApiError),

    /// Response list fetch failed
    #[error("could not load responses: {0}")]
    Fetch(ApiError),

    /// Action needs a session
    #[error("not logged in")]
    NotLoggedIn,
}

impl AdminError {
    /// Whether the failure ended the session
    #[inline]
    #[must_use]
    pub fn ended_session(&self) -> bool {
        matches!(self, Self::Fetch(e) if e.is_unauthorized())
    }
}

/// Presentational component errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteError {
    /// Gallery needs at least one image
    #[error("gallery has no images")]
    EmptyGallery,

    /// Viewer opened on a missing image
    #[error("image {index} out of range (gallery has {len})")]
    ImageOutOfRange { index: usize, len: usize },
}
