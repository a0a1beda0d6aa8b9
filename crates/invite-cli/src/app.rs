//! Command execution
//!
//! Output goes to the given writer and prompts read from the given reader,
//! so every command runs the same under tests as on a terminal.

use crate::cli::{AdminCommand, Command, RsvpArgs};
use anyhow::{bail, Context, Result};
use invite_client::{AuthLayer, HttpTransport, InviteApi, Session};
use invite_core::{AggregatedTotals, Attendance, InviteConfig, RsvpForm, StoredResponse};
use invite_site::{AdminState, AdminView, Autoplay, Carousel, InvitationPage};
use invite_storage::{CredentialStore, FileStore, RsvpMirror, SharedStore};
use parking_lot::Mutex;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

type Api = InviteApi<AuthLayer<HttpTransport>>;

/// Loaded configuration plus local state
#[derive(Debug)]
pub struct App {
    config: InviteConfig,
    store: SharedStore,
    session: Arc<Session>,
}

#[derive(Serialize)]
struct AdminReport<'a> {
    totals: AggregatedTotals,
    responses: &'a [StoredResponse],
}

impl App {
    /// Open the file store named by the config
    ///
    /// # Errors
    /// The storage file exists but cannot be read.
    pub fn open(config: InviteConfig) -> Result<Self> {
        let store = FileStore::open(&config.storage_path).with_context(|| {
            format!("opening local storage {}", config.storage_path.display())
        })?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Use an existing store
    #[must_use]
    pub fn with_store(config: InviteConfig, store: SharedStore) -> Self {
        let session = Arc::new(Session::restore(CredentialStore::new(store.clone())));
        Self {
            config,
            store,
            session,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    fn api(&self) -> Result<Api> {
        InviteApi::connect(&self.config.api_base_url, self.session.clone())
            .context("building HTTP client")
    }

    fn page(&self) -> Result<InvitationPage> {
        Ok(InvitationPage::from_config(&self.config)?)
    }

    /// Run one command
    ///
    /// # Errors
    /// Any failure the command reports; the message is meant for the user.
    pub async fn run(
        &self,
        command: Command,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<()> {
        match command {
            Command::Details => {
                write!(out, "{}", self.page()?.render_text())?;
                Ok(())
            }
            Command::Gallery { ticks, watch } => {
                if watch {
                    self.watch_gallery(ticks, out).await
                } else {
                    self.step_gallery(ticks, out)
                }
            }
            Command::Rsvp(args) => self.rsvp(args, input, out).await,
            Command::Mirror => self.mirror(out),
            Command::Admin(cmd) => self.admin(cmd, input, out).await,
        }
    }

    fn step_gallery(&self, ticks: usize, out: &mut dyn Write) -> Result<()> {
        let mut carousel = Carousel::from_config(&self.config.gallery)?;
        print_slide(&carousel, out)?;
        for _ in 0..ticks {
            carousel.tick(carousel.interval());
            print_slide(&carousel, out)?;
        }
        Ok(())
    }

    async fn watch_gallery(&self, ticks: usize, out: &mut dyn Write) -> Result<()> {
        let carousel = Carousel::from_config(&self.config.gallery)?;
        let resolution = carousel.interval().min(Duration::from_millis(250));
        print_slide(&carousel, out)?;

        let shared = Arc::new(Mutex::new(carousel));
        let _autoplay = Autoplay::spawn(shared.clone(), resolution);
        let target = ticks as u64;
        let mut shown = 0;
        while shown < target {
            tokio::time::sleep(resolution).await;
            let snapshot = shared.lock().clone();
            let advances = snapshot.advances().min(target);
            if advances > shown {
                shown = advances;
                print_slide(&snapshot, out)?;
            }
        }
        Ok(())
    }

    async fn rsvp(
        &self,
        args: RsvpArgs,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<()> {
        let page = self.page()?;
        let mut flow = page.rsvp_flow(self.api()?, RsvpMirror::new(self.store.clone()));

        let attendance: Attendance = args.attending.parse()?;
        let mut form = RsvpForm::new(args.name).with_attendance(attendance);
        if let Some(attendees) = args.attendees {
            form = form.with_attendees(attendees);
        }
        if let Some(message) = args.message {
            form = form.with_message(message);
        }
        *flow.form_mut()? = form;

        flow.submit()?;
        if let Some(confirmation) = flow.confirmation() {
            write!(out, "{confirmation}")?;
        }

        if !args.yes && !prompt_yes(input, out, "Send this RSVP? [y/N] ")? {
            flow.cancel()?;
            writeln!(out, "RSVP not sent.")?;
            return Ok(());
        }

        match flow.confirm().await {
            Ok(thank_you) => {
                write!(out, "{thank_you}")?;
                Ok(())
            }
            Err(e) => {
                if let Some(message) = flow.error() {
                    writeln!(out, "{message}")?;
                }
                writeln!(out, "{}", invite_site::page::CONTACT_PROMPT)?;
                for contact in flow.contacts() {
                    writeln!(out, "  {} ({})", contact.label, contact.tel_uri())?;
                }
                Err(e).context("RSVP was not sent")
            }
        }
    }

    fn mirror(&self, out: &mut dyn Write) -> Result<()> {
        let entries = RsvpMirror::new(self.store.clone())
            .entries()
            .context("reading local submissions")?;
        if entries.is_empty() {
            writeln!(out, "No local submissions.")?;
        }
        for entry in entries {
            let attendees = entry
                .attendees
                .map(|n| format!(" x{n}"))
                .unwrap_or_default();
            writeln!(
                out,
                "{}  {:<20} {}{}",
                entry.submitted_at.format("%Y-%m-%d %H:%M"),
                entry.name,
                entry.attendance,
                attendees
            )?;
        }
        Ok(())
    }

    async fn admin(
        &self,
        cmd: AdminCommand,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<()> {
        let mut view = AdminView::new(self.api()?, self.session.clone());
        match cmd {
            AdminCommand::Login { passcode } => {
                if view.state().is_logged_in() {
                    bail!("already logged in; run `invite admin logout` first");
                }
                let passcode = match passcode {
                    Some(p) => p,
                    None => prompt_line(input, out, "Passcode: ")?,
                };
                view.set_passcode(passcode);
                if let Err(e) = view.login().await {
                    let message = view.login_error().map_or_else(|| e.to_string(), str::to_string);
                    bail!("{message}");
                }
                writeln!(out, "Logged in.")?;
                print_admin(&view, out)
            }
            AdminCommand::List { json } => {
                if view.state() != AdminState::LoggedIn {
                    bail!("not logged in; run `invite admin login`");
                }
                if let Err(e) = view.open().await {
                    if e.ended_session() {
                        bail!("session expired; run `invite admin login`");
                    }
                    return Err(e).context("loading responses");
                }
                if json {
                    let report = AdminReport {
                        totals: view.totals(),
                        responses: view.responses(),
                    };
                    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
                    Ok(())
                } else {
                    print_admin(&view, out)
                }
            }
            AdminCommand::Logout => {
                view.logout();
                writeln!(out, "Logged out.")?;
                Ok(())
            }
        }
    }
}

fn print_slide(carousel: &Carousel, out: &mut dyn Write) -> Result<()> {
    let image = carousel.current();
    writeln!(out, "{}  {} ({})", carousel.counter_label(), image.alt, image.src)?;
    Ok(())
}

fn print_admin<T>(view: &AdminView<T>, out: &mut dyn Write) -> Result<()>
where
    T: invite_client::Transport,
{
    if let Some(error) = view.fetch_error() {
        writeln!(out, "{error}")?;
        return Ok(());
    }
    writeln!(out, "{}", view.totals())?;
    writeln!(out)?;
    writeln!(out, "{:<24} {:<9} {:>6}  Message", "Name", "Attending", "People")?;
    for row in view.rows() {
        writeln!(
            out,
            "{:<24} {:<9} {:>6}  {}",
            row.name, row.attending, row.people, row.message
        )?;
    }
    Ok(())
}

fn prompt_line(input: &mut dyn BufRead, out: &mut dyn Write, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("reading from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_yes(input: &mut dyn BufRead, out: &mut dyn Write, prompt: &str) -> Result<bool> {
    let answer = prompt_line(input, out, prompt)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
