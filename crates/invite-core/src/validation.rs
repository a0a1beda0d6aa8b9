//! Guest form validation
//!
//! Rules, in order: a non-blank name, a yes/no choice, and for guests who
//! accept a whole-number party size. Out-of-range sizes are clamped to
//! `[MIN_ATTENDEES, MAX_ATTENDEES]` rather than rejected.

use crate::error::ValidationError;
use crate::types::{Attendance, RsvpDecision, RsvpForm, ValidatedRsvp};
use std::num::IntErrorKind;

/// Smallest party size
pub const MIN_ATTENDEES: u32 = 1;
/// Largest party size
pub const MAX_ATTENDEES: u32 = 20;

/// Clamp a requested party size into range
#[inline]
#[must_use]
pub fn clamp_attendees(requested: i64) -> u32 {
    let clamped = requested.clamp(i64::from(MIN_ATTENDEES), i64::from(MAX_ATTENDEES));
    u32::try_from(clamped).unwrap_or(MIN_ATTENDEES)
}

/// Parse the attendee field
///
/// Blank input falls back to the form default of one guest. Integers too
/// large for `i64` clamp like any other out-of-range value.
///
/// # Errors
/// `ValidationError::InvalidAttendeeCount` when the text is not an integer.
pub fn parse_attendee_count(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(MIN_ATTENDEES);
    }

    match trimmed.parse::<i64>() {
        Ok(n) => Ok(clamp_attendees(n)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(MAX_ATTENDEES),
            IntErrorKind::NegOverflow => Ok(MIN_ATTENDEES),
            _ => Err(ValidationError::InvalidAttendeeCount(trimmed.to_string())),
        },
    }
}

pub(crate) fn validate_form(form: &RsvpForm) -> Result<ValidatedRsvp, ValidationError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    // The count field is ignored entirely for guests who decline
    let decision = match form.attendance {
        Attendance::Yes => RsvpDecision::Accepted {
            attendees: parse_attendee_count(&form.attendees)?,
        },
        Attendance::No => RsvpDecision::Declined,
        Attendance::Unset => return Err(ValidationError::MissingAttendance),
    };

    let message = Some(form.message.trim())
        .filter(|m| !m.is_empty())
        .map(str::to_string);

    Ok(ValidatedRsvp {
        name: name.to_string(),
        decision,
        message,
    })
}
