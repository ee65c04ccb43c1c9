//! Command-line interface argument parsing
//!
//! Defines all CLI commands and their arguments using Clap.

use crate::error::LeaderboardError;
use clap::{Parser, Subcommand};

/// Leaderboard CLI - submit and list scores on a leaderboard backend
#[derive(Parser, Debug)]
#[command(name = "leaderboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Submit and list scores on a remote leaderboard backend")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides config and LEADERBOARD_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Resource path for this invocation (defaults to the configured default path)
    #[arg(long, global = true)]
    pub path: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List leaderboard entries
    ///
    /// Entries are printed in the order the backend returns them.
    ///
    /// Examples:
    ///   leaderboard list
    ///   leaderboard list --path weekly
    #[command(visible_alias = "ls")]
    #[command(display_order = 1)]
    List,

    /// Submit a score
    ///
    /// Posts the entry, prints the backend's answer, then refreshes the list.
    ///
    /// Examples:
    ///   leaderboard submit --name alice --score 1234.5
    ///   leaderboard submit --name alice --score 99 --id 65f0c0ffee
    #[command(visible_alias = "post")]
    #[command(display_order = 2)]
    Submit {
        /// Display name of the participant
        #[arg(long)]
        name: String,

        /// Achieved score
        #[arg(long, allow_negative_numbers = true)]
        score: f64,

        /// Identifier of an existing entry to update
        #[arg(long)]
        id: Option<String>,

        /// When the score was achieved (RFC 3339); the backend assigns one if omitted
        #[arg(long)]
        timestamp: Option<String>,

        /// Skip listing entries after submitting
        #[arg(long)]
        no_refresh: bool,
    },

    /// Save backend settings to the config file
    ///
    /// Example:
    ///   leaderboard configure --url https://scores.example/api --default-path leaderboard
    #[command(display_order = 3)]
    Configure {
        /// Backend base URL to store
        #[arg(long = "url", value_name = "URL")]
        url: String,

        /// Default resource path to store
        #[arg(long)]
        default_path: Option<String>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Print the CLI version
    #[command(display_order = 4)]
    Version,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Reject flag combinations clap cannot express
    ///
    /// The global `--base-url` overrides the backend for one invocation;
    /// `configure` stores a URL with `--url` instead.
    pub fn validate(&self) -> Result<(), LeaderboardError> {
        if matches!(self.command, Commands::Configure { .. }) && self.base_url.is_some() {
            return Err(LeaderboardError::InvalidArgument(
                "configure takes the URL to store via --url, not --base-url".to_string(),
            ));
        }
        Ok(())
    }
}
