//! Invite CLI - terminal front end for the invitation site
//!
//! ```text
//! invite details
//! invite gallery [--ticks N] [--watch]
//! invite rsvp --name NAME --attending yes|no [--attendees N] [--message TEXT] [-y]
//! invite mirror
//! invite admin login [--passcode P] | list [--json] | logout
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod logging;

pub use app::App;
pub use cli::{AdminCommand, Cli, Command, RsvpArgs};
