//! Core types for the invitation client
//!
//! Defines:
//! - Guest form input (`RsvpForm`) and its validated form (`ValidatedRsvp`)
//! - Wire records for the remote RSVP service
//! - Local mirror entries

use crate::error::ValidationError;
use crate::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Wire status for an accepted invitation
pub const STATUS_ACCEPTED: i32 = 1;
/// Wire status for a declined invitation
pub const STATUS_DECLINED: i32 = 0;

/// Guest attendance choice (tri-state until submitted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    /// Joining the celebration
    Yes,
    /// Not joining
    No,
    /// No choice made yet
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl Attendance {
    /// Whether a yes/no choice has been made
    #[inline]
    #[must_use]
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Form value string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unset => "",
        }
    }
}

impl FromStr for Attendance {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            "" => Ok(Self::Unset),
            other => Err(ValidationError::UnknownAttendance(other.to_string())),
        }
    }
}

impl std::fmt::Display for Attendance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw guest form state, as typed
///
/// Fields stay strings so that whatever the guest entered survives a
/// failed validation or a failed submission untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpForm {
    /// Guest name
    pub name: String,
    /// Attendance choice
    pub attendance: Attendance,
    /// Attendee count as entered
    pub attendees: String,
    /// Optional message for the couple
    pub message: String,
}

impl RsvpForm {
    /// Create a form with a name and defaults elsewhere
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// With attendance choice
    #[inline]
    #[must_use]
    pub fn with_attendance(mut self, attendance: Attendance) -> Self {
        self.attendance = attendance;
        self
    }

    /// With attendee count text
    #[inline]
    #[must_use]
    pub fn with_attendees(mut self, attendees: impl Into<String>) -> Self {
        self.attendees = attendees.into();
        self
    }

    /// With message
    #[inline]
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Validate the form
    ///
    /// # Errors
    /// Returns the first failing rule: name, then attendance, then count.
    pub fn validate(&self) -> Result<ValidatedRsvp, ValidationError> {
        validation::validate_form(self)
    }
}

impl Default for RsvpForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            attendance: Attendance::Unset,
            attendees: "1".to_string(),
            message: String::new(),
        }
    }
}

/// Validated attendance decision
///
/// The attendee count only exists on the accepted branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RsvpDecision {
    /// Attending with a party of `attendees`
    Accepted { attendees: u32 },
    /// Not attending
    Declined,
}

impl RsvpDecision {
    /// Wire status
    #[inline]
    #[must_use]
    pub fn status(&self) -> i32 {
        match self {
            Self::Accepted { .. } => STATUS_ACCEPTED,
            Self::Declined => STATUS_DECLINED,
        }
    }

    /// Party size, accepted only
    #[inline]
    #[must_use]
    pub fn attendees(&self) -> Option<u32> {
        match self {
            Self::Accepted { attendees } => Some(*attendees),
            Self::Declined => None,
        }
    }

    /// Attendance this decision came from
    #[inline]
    #[must_use]
    pub fn attendance(&self) -> Attendance {
        match self {
            Self::Accepted { .. } => Attendance::Yes,
            Self::Declined => Attendance::No,
        }
    }
}

/// RSVP that passed validation and is ready to be confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRsvp {
    /// Trimmed guest name
    pub name: String,
    /// Attendance decision
    pub decision: RsvpDecision,
    /// Message, `None` when blank
    pub message: Option<String>,
}

impl ValidatedRsvp {
    /// Whether the guest is attending
    #[inline]
    #[must_use]
    pub fn is_attending(&self) -> bool {
        matches!(self.decision, RsvpDecision::Accepted { .. })
    }

    /// Record sent to the remote service
    #[must_use]
    pub fn to_record(&self) -> RsvpRecord {
        RsvpRecord {
            name: self.name.clone(),
            status: self.decision.status(),
            count: self.decision.attendees(),
            message: self.message.clone(),
        }
    }

    /// Local mirror copy stamped with the submission time
    #[must_use]
    pub fn to_mirror_entry(&self, submitted_at: DateTime<Utc>) -> MirrorEntry {
        MirrorEntry {
            name: self.name.clone(),
            attendance: self.decision.attendance(),
            attendees: self.decision.attendees(),
            message: self.message.clone(),
            submitted_at,
        }
    }
}

/// Create body for the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpRecord {
    pub name: String,
    pub status: i32,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response stored by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredResponse {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub status: i32,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

impl StoredResponse {
    /// Status is accepted
    #[inline]
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status == STATUS_ACCEPTED
    }

    /// Status is declined
    #[inline]
    #[must_use]
    pub fn is_declined(&self) -> bool {
        self.status == STATUS_DECLINED
    }

    /// Party size, missing treated as zero
    #[inline]
    #[must_use]
    pub fn attendees(&self) -> u32 {
        self.count.unwrap_or(0)
    }
}

/// Reply to a create call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub inserted_id: String,
    pub user: RsvpRecord,
}

/// Admin login body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub passcode: String,
}

/// Admin login reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Local, non-authoritative copy of a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MirrorEntry {
    pub name: String,
    pub attendance: Attendance,
    #[serde(default)]
    pub attendees: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl MirrorEntry {
    /// Whether this entry carries the same values as `record`
    #[must_use]
    pub fn matches_record(&self, record: &RsvpRecord) -> bool {
        let status = match self.attendance {
            Attendance::Yes => STATUS_ACCEPTED,
            Attendance::No => STATUS_DECLINED,
            Attendance::Unset => return false,
        };
        self.name == record.name
            && status == record.status
            && self.attendees == record.count
            && self.message == record.message
    }
}
