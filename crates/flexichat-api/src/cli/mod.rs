//! CLI command definitions for the `flexichat` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod memory;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Talk to the FlexiPDF assistant from the terminal or serve its REST API.
#[derive(Parser)]
#[command(name = "flexichat", version, about, long_about = None)]
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
    /// Start the REST API server.
    Serve {
        /// Address to bind, overriding config.toml.
        #[arg(long)]
        listen: Option<String>,
    },

    /// Chat with the assistant interactively ("exit" or "quit" to leave).
    Chat,

    /// Show the durable conversation log.
    History,

    /// Wipe the memory record and start fresh.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}
