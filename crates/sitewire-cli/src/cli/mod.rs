//! CLI command definitions and dispatch for the `sitewire` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod hydrate;
pub mod theme;

use clap::{Parser, Subcommand};

/// Hydrate and exercise a sitewire-powered page from the terminal.
#[derive(Parser)]
#[command(name = "sitewire", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the configured fragments and logo strips, then report what
    /// hydrated.
    Hydrate,

    /// Chat with the site assistant (login, then an ask loop).
    Chat,

    /// Show or toggle the persisted theme.
    Theme {
        #[command(subcommand)]
        action: theme::ThemeCommand,
    },
}
