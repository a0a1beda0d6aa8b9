//! Argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "invite", author, version, about = "Wedding invitation: details, RSVP and admin tally")]
pub struct Cli {
    /// TOML config file
    #[arg(long, global = true, env = "INVITE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true, env = "INVITE_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the invitation page
    Details,

    /// Step through the photo gallery
    Gallery {
        /// Number of auto-advance intervals to show
        #[arg(long, default_value_t = 3)]
        ticks: usize,

        /// Advance in real time instead of simulating the timer
        #[arg(long)]
        watch: bool,
    },

    /// Send an RSVP
    Rsvp(RsvpArgs),

    /// List submissions mirrored on this machine
    Mirror,

    /// Admin tally
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RsvpArgs {
    #[arg(long)]
    pub name: String,

    /// yes or no
    #[arg(long)]
    pub attending: String,

    /// Party size when attending (1 to 20)
    #[arg(long)]
    pub attendees: Option<String>,

    #[arg(long)]
    pub message: Option<String>,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    /// Exchange the passcode for a session
    Login {
        /// Read from stdin when omitted
        #[arg(long)]
        passcode: Option<String>,
    },

    /// Show responses and totals
    List {
        #[arg(long)]
        json: bool,
    },

    /// End the session
    Logout,
}
