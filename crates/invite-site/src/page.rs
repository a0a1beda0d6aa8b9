//! Whole invitation page assembled from configuration

use crate::details::EventDetails;
use crate::error::SiteError;
use crate::footer::FooterView;
use crate::gallery::Carousel;
use crate::hero::HeroView;
use crate::navigation::{NavBar, Section};
use crate::rsvp::RsvpFlow;
use invite_client::{InviteApi, Transport};
use invite_core::{Contact, InviteConfig};
use invite_storage::RsvpMirror;
use std::fmt::Write as _;

pub const CONTACT_PROMPT: &str = "Can't fill out the form? Contact us directly:";

/// Static sections plus the navigation and gallery state
#[derive(Debug, Clone)]
pub struct InvitationPage {
    pub nav: NavBar,
    pub hero: HeroView,
    pub gallery: Carousel,
    pub details: EventDetails,
    pub footer: FooterView,
    pub contacts: Vec<Contact>,
}

impl InvitationPage {
    /// # Errors
    /// `SiteError::EmptyGallery` when the config has no gallery images.
    pub fn from_config(config: &InviteConfig) -> Result<Self, SiteError> {
        let mut hero = HeroView::from_event(&config.event);
        hero.mount();
        Ok(Self {
            nav: NavBar::new(config.navigation),
            hero,
            gallery: Carousel::from_config(&config.gallery)?,
            details: EventDetails::from_event(&config.event),
            footer: FooterView::new(&config.event, &config.footer),
            contacts: config.contacts.clone(),
        })
    }

    /// RSVP flow for this page, carrying its phone contacts
    #[must_use]
    pub fn rsvp_flow<T: Transport>(&self, api: InviteApi<T>, mirror: RsvpMirror) -> RsvpFlow<T> {
        RsvpFlow::new(api, mirror).with_contacts(self.contacts.clone())
    }

    /// Plain-text rendering of every section, top to bottom
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let links: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
        let _ = writeln!(out, "[ {} ]\n", links.join(" | "));
        let _ = writeln!(out, "{}", self.hero);

        let _ = writeln!(out, "Gallery ({} photos)", self.gallery.len());
        for (i, image) in self.gallery.images().iter().enumerate() {
            let _ = writeln!(out, "  {}. {} ({})", i + 1, image.alt, image.src);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "{}", self.details);

        if !self.contacts.is_empty() {
            let _ = writeln!(out, "{CONTACT_PROMPT}");
            for contact in &self.contacts {
                let _ = writeln!(out, "  {} ({})", contact.label, contact.tel_uri());
            }
            let _ = writeln!(out);
        }

        let _ = write!(out, "{}", self.footer);
        out
    }
}
