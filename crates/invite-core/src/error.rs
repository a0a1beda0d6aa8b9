//! Error types for Invite Core
//!
//! Provides error handling for:
//! - Guest form validation (caught before any network call)
//! - Configuration loading

use std::path::PathBuf;

/// Guest form validation errors
///
/// These never reach the network layer; the form reports them inline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Name missing or blank
    #[error("please enter your name")]
    MissingName,

    /// Neither yes nor no selected
    #[error("please let us know whether you will attend")]
    MissingAttendance,

    /// Attendee count is not a whole number
    #[error("number of attendees must be a whole number, got '{0}'")]
    InvalidAttendeeCount(String),

    /// Attendance text not recognised
    #[error("unknown attendance choice: '{0}'")]
    UnknownAttendance(String),
}

impl ValidationError {
    /// Form field the error belongs to
    #[inline]
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::MissingAttendance | Self::UnknownAttendance(_) => "attendance",
            Self::InvalidAttendeeCount(_) => "attendees",
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but are unusable
    #[error("invalid config value: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
