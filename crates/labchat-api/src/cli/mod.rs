//! CLI command definitions for the `labchat` binary.
//!
//! Uses clap derive macros for argument parsing. Without a subcommand the
//! interactive chat starts.

pub mod ask;
pub mod chat;
pub mod history;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use labchat_types::theme::Theme;

/// Chat with a retrieval-augmented summarization backend.
#[derive(Parser)]
#[command(name = "labchat", version, about, long_about = None)]
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

    /// Also export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Backend origin, e.g. http://127.0.0.1:8000.
    #[arg(long, global = true, env = "LABCHAT_BASE_URL")]
    pub base_url: Option<String>,

    /// Credential sent with summary requests.
    #[arg(long, global = true, env = "LABCHAT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Initial theme (light or dark).
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Start an interactive chat session (default).
    Chat,

    /// Ask a single question and print the reply.
    Ask {
        /// The question to send.
        message: String,

        /// Print the bot reply markup instead of rendering it.
        #[arg(long)]
        html: bool,
    },

    /// Show the messages the backend recorded for a session.
    History {
        /// Session id to look up.
        session_id: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
