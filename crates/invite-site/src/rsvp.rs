//! RSVP submission flow
//!
//! ```text
//! Editing --submit--> Confirming --confirm ok--> Submitted
//!    ^                    |  |
//!    +------cancel--------+  +--confirm failed--> Confirming (error set)
//! ```
//!
//! Nothing reaches the network before `confirm`. `Submitted` is terminal.

use crate::error::FlowError;
use chrono::Utc;
use invite_client::{InviteApi, Transport};
use invite_core::{Contact, RsvpForm, RsvpRecord, ValidatedRsvp};
use invite_storage::RsvpMirror;

/// Externally visible stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RsvpStage {
    Editing,
    Confirming,
    Submitted,
}

impl std::fmt::Display for RsvpStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Editing => "editing",
            Self::Confirming => "confirming",
            Self::Submitted => "submitted",
        })
    }
}

#[derive(Debug, Clone)]
enum State {
    Editing,
    Confirming(ValidatedRsvp),
    Submitted(ThankYouView),
}

/// Guest RSVP flow
#[derive(Debug)]
pub struct RsvpFlow<T> {
    api: InviteApi<T>,
    mirror: RsvpMirror,
    form: RsvpForm,
    state: State,
    error: Option<String>,
    loading: bool,
    contacts: Vec<Contact>,
}

impl<T: Transport> RsvpFlow<T> {
    /// Start a fresh flow in `Editing`
    #[must_use]
    pub fn new(api: InviteApi<T>, mirror: RsvpMirror) -> Self {
        Self {
            api,
            mirror,
            form: RsvpForm::default(),
            state: State::Editing,
            error: None,
            loading: false,
            contacts: Vec::new(),
        }
    }

    /// With fallback phone contacts
    #[must_use]
    pub fn with_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.contacts = contacts;
        self
    }

    #[inline]
    #[must_use]
    pub fn stage(&self) -> RsvpStage {
        match self.state {
            State::Editing => RsvpStage::Editing,
            State::Confirming(_) => RsvpStage::Confirming,
            State::Submitted(_) => RsvpStage::Submitted,
        }
    }

    /// Current form values (kept through every stage)
    #[inline]
    #[must_use]
    pub fn form(&self) -> &RsvpForm {
        &self.form
    }

    /// Editable form
    ///
    /// # Errors
    /// `FlowError::WrongStage` outside `Editing`.
    pub fn form_mut(&mut self) -> Result<&mut RsvpForm, FlowError> {
        match self.state {
            State::Editing => Ok(&mut self.form),
            _ => Err(FlowError::WrongStage(self.stage())),
        }
    }

    /// Inline error from the last submit or confirm
    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a create call is in flight
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Phone contacts for guests who cannot use the form
    #[inline]
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Validate and move to `Confirming`
    ///
    /// Returns the exact record that `confirm` will send.
    ///
    /// # Errors
    /// `FlowError::Validation` (stays in `Editing`, error stored inline) or
    /// `FlowError::WrongStage`.
    pub fn submit(&mut self) -> Result<RsvpRecord, FlowError> {
        if !matches!(self.state, State::Editing) {
            return Err(FlowError::WrongStage(self.stage()));
        }

        match self.form.validate() {
            Ok(rsvp) => {
                let record = rsvp.to_record();
                self.error = None;
                self.state = State::Confirming(rsvp);
                tracing::debug!("RSVP for {} awaiting confirmation", record.name);
                Ok(record)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Values awaiting confirmation
    #[must_use]
    pub fn confirmation(&self) -> Option<ConfirmationView> {
        match &self.state {
            State::Confirming(rsvp) => Some(ConfirmationView {
                lines: summary_lines(rsvp),
            }),
            _ => None,
        }
    }

    /// Back to editing with the form intact
    ///
    /// # Errors
    /// `FlowError::WrongStage` outside `Confirming`.
    pub fn cancel(&mut self) -> Result<(), FlowError> {
        match self.state {
            State::Confirming(_) => {
                self.state = State::Editing;
                self.error = None;
                Ok(())
            }
            _ => Err(FlowError::WrongStage(self.stage())),
        }
    }

    /// Send the confirmed RSVP
    ///
    /// On success the submission is mirrored locally (failures there are
    /// logged and ignored) and the flow ends in `Submitted`. On failure the
    /// flow stays in `Confirming` so the guest can confirm again.
    ///
    /// # Errors
    /// `FlowError::Api` on a remote failure, `FlowError::WrongStage`
    /// outside `Confirming`.
    pub async fn confirm(&mut self) -> Result<ThankYouView, FlowError> {
        let State::Confirming(rsvp) = &self.state else {
            return Err(FlowError::WrongStage(self.stage()));
        };
        let rsvp = rsvp.clone();
        let record = rsvp.to_record();

        self.loading = true;
        self.error = None;
        let result = self.api.create_response(&record).await;
        self.loading = false;

        if let Err(e) = result {
            tracing::warn!("RSVP submission for {} failed: {}", record.name, e);
            self.error = Some(e.user_message());
            return Err(e.into());
        }

        match self.mirror.append(rsvp.to_mirror_entry(Utc::now())) {
            Ok(len) => tracing::debug!("Mirrored RSVP locally ({len} total)"),
            Err(e) => tracing::warn!("Could not mirror RSVP locally: {}", e),
        }

        tracing::info!("RSVP submitted for {}", record.name);
        let view = ThankYouView::from_rsvp(&rsvp);
        self.state = State::Submitted(view.clone());
        Ok(view)
    }

    /// Thank-you view, once submitted
    #[must_use]
    pub fn thank_you(&self) -> Option<&ThankYouView> {
        match &self.state {
            State::Submitted(view) => Some(view),
            _ => None,
        }
    }
}

/// Values shown before the guest confirms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    pub lines: Vec<String>,
}

impl std::fmt::Display for ConfirmationView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Please confirm your RSVP")?;
        for line in &self.lines {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

/// Read-only summary after a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThankYouView {
    pub name: String,
    pub attending: bool,
    pub attendees: Option<u32>,
    pub message: Option<String>,
}

impl ThankYouView {
    fn from_rsvp(rsvp: &ValidatedRsvp) -> Self {
        Self {
            name: rsvp.name.clone(),
            attending: rsvp.is_attending(),
            attendees: rsvp.decision.attendees(),
            message: rsvp.message.clone(),
        }
    }

    #[must_use]
    pub fn headline(&self) -> &'static str {
        "Thank You!"
    }

    #[must_use]
    pub fn greeting(&self) -> String {
        if self.attending {
            format!(
                "We're thrilled that you'll be joining us on our special day, {}!",
                self.name
            )
        } else {
            format!(
                "Thank you for letting us know, {}. We'll miss you on our special day.",
                self.name
            )
        }
    }

    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Name: {}", self.name),
            format!("Attending: {}", yes_no(self.attending)),
        ];
        if let (true, Some(n)) = (self.attending, self.attendees) {
            lines.push(format!("Attendees: {n}"));
        }
        if let Some(message) = &self.message {
            lines.push(format!("Message: {message}"));
        }
        lines
    }
}

impl std::fmt::Display for ThankYouView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.headline())?;
        writeln!(f, "{}", self.greeting())?;
        for line in self.summary_lines() {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

fn yes_no(attending: bool) -> &'static str {
    if attending {
        "Yes"
    } else {
        "No"
    }
}

fn summary_lines(rsvp: &ValidatedRsvp) -> Vec<String> {
    ThankYouView::from_rsvp(rsvp).summary_lines()
}
