//! Invite Core - data model for the invitation client
//!
//! Everything the other crates agree on:
//! - Guest form input and its validated form
//! - Wire records exchanged with the remote RSVP service
//! - Local mirror entries
//! - Aggregated totals for the admin view
//! - Client configuration
//!
//! # Example
//!
//! ```rust
//! use invite_core::{Attendance, RsvpForm};
//!
//! let form = RsvpForm::new("Alice")
//!     .with_attendance(Attendance::Yes)
//!     .with_attendees("3");
//! let rsvp = form.validate().unwrap();
//! assert_eq!(rsvp.to_record().count, Some(3));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod totals;
pub mod types;
pub mod validation;

pub use config::{
    Contact, EventConfig, FooterConfig, GalleryConfig, GalleryImage, InviteConfig,
    NavigationConfig,
};
pub use error::{ConfigError, ValidationError};
pub use totals::AggregatedTotals;
pub use types::{
    Attendance, CreatedResponse, LoginRequest, MirrorEntry, RsvpDecision, RsvpForm, RsvpRecord,
    StoredResponse, TokenResponse, ValidatedRsvp, STATUS_ACCEPTED, STATUS_DECLINED,
};
pub use validation::{clamp_attendees, parse_attendee_count, MAX_ATTENDEES, MIN_ATTENDEES};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with invitation data
    pub use crate::{
        AggregatedTotals, Attendance, InviteConfig, RsvpForm, RsvpRecord, StoredResponse,
        ValidatedRsvp, ValidationError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
