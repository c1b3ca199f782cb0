//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};

use crate::build_info;

/// Pick a preset agent profile (model + thinking level) and persist it.
#[derive(Debug, Parser)]
#[command(name = "agent-profiles", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Path to settings file (default: ./agent-profiles.toml or
    /// ~/.config/agent-profiles/settings.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show every profile as a card (default).
    List {
        /// Print cards as JSON instead.
        #[arg(long)]
        json: bool,
    },
    /// Print the effective selection with resolved labels.
    Show,
    /// Persist a selection by profile id or 1-based index.
    Select {
        /// Profile id (case-insensitive) or list index.
        profile: String,
    },
    /// Choose a profile interactively.
    Pick,
    /// Print the settings file path in use.
    Path,
}

impl Args {
    /// Subcommand to run; `list` when none was given.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::List { json: false })
    }
}
