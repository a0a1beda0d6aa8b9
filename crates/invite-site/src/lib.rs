//! Invite Site - views for the invitation page
//!
//! Stateful pieces:
//! - `RsvpFlow`: edit, confirm, submit, thank-you
//! - `AdminView`: passcode login, response list, totals
//!
//! Presentational pieces, built from `InviteConfig`:
//! - `Carousel` with a tokio autoplay driver
//! - `NavBar`, `HeroView`, `EventDetails`, `FooterView`
//! - `InvitationPage` tying the sections together
//!
//! Views are UI-agnostic: they hold state and produce display values, and
//! a front end (the `invite` CLI, or anything else) renders them.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod admin;
pub mod details;
pub mod error;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod navigation;
pub mod page;
pub mod rsvp;

pub use admin::{AdminState, AdminView, ResponseRow};
pub use details::EventDetails;
pub use error::{AdminError, FlowError, SiteError};
pub use footer::FooterView;
pub use gallery::{Autoplay, Carousel};
pub use hero::HeroView;
pub use navigation::{NavBar, Section};
pub use page::InvitationPage;
pub use rsvp::{ConfirmationView, RsvpFlow, RsvpStage, ThankYouView};
