#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

//! # Leaderboard client
//!
//! A thin client for a remote leaderboard backend.
//!
//! ## Architecture
//!
//! - **[`entry`]** - The leaderboard record and its form fields
//! - **[`client`]** - URL resolution and the single-request GET/POST calls
//! - **[`config`]** - Configuration loading and persistence
//! - **[`error`]** - Error types and error handling
//! - **[`commands`]** - Command implementations for the binary
//! - **[`logging`]** - Logger setup
//!
//! ## Quick Start
//!
//! ```bash
//! leaderboard configure --url https://scores.example/api
//! leaderboard submit --name alice --score 1234.5
//! leaderboard list
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod entry;
pub mod error;
pub mod logging;

/// Error type alias for convenience
pub use error::{LeaderboardError, Result};

/// Configuration type alias for convenience
pub use config::Config;

pub use client::LeaderboardClient;
pub use entry::Entry;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "leaderboard";
