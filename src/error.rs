//! Error types and handling for the leaderboard client
//!
//! Every terminal outcome of a request that is not a success maps onto one of
//! these variants. Nothing here is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for leaderboard operations
pub type Result<T> = std::result::Result<T, LeaderboardError>;

/// Error types for leaderboard operations
#[derive(Error, Debug)]
pub enum LeaderboardError {
    // ═══════════════════════════════════════════════════════════════
    // Request Outcomes
    // ═══════════════════════════════════════════════════════════════
    /// Base URL missing at call time; raised before any network activity
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network-level failure (connection refused, timeout, DNS)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend answered with a status code >= 400
    #[error("Backend error: HTTP {status} - {body}")]
    Backend {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    // ═══════════════════════════════════════════════════════════════
    // Configuration File Errors
    // ═══════════════════════════════════════════════════════════════
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read configuration file
    #[error("Failed to read config from {path}: {reason}")]
    ConfigRead {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O message
        reason: String,
    },

    /// Failed to write configuration file
    #[error("Failed to write config to {path}: {reason}")]
    ConfigWrite {
        /// Config file or directory path
        path: PathBuf,
        /// Underlying I/O message
        reason: String,
    },

    // ═══════════════════════════════════════════════════════════════
    // Payload & Input Errors
    // ═══════════════════════════════════════════════════════════════
    /// Failed to deserialize a response body
    #[error("Deserialization failed: {0}")]
    Deserialization(String),

    /// Invalid input argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LeaderboardError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_)
            | Self::InvalidConfig(_)
            | Self::ConfigRead { .. }
            | Self::ConfigWrite { .. } => 1,
            Self::InvalidArgument(_) => 2,
            Self::Transport(_) => 4,
            Self::Backend { .. } => 5,
            Self::Deserialization(_) => 6,
            Self::Internal(_) => 1,
        }
    }

    /// HTTP status carried by a backend error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LeaderboardError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() {
            Self::Deserialization(format!("JSON syntax error: {err}"))
        } else {
            Self::Deserialization(err.to_string())
        }
    }
}

impl From<reqwest::Error> for LeaderboardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport(format!("request timed out: {err}"))
        } else if err.is_connect() {
            Self::Transport(format!("connection failed: {err}"))
        } else if err.is_builder() {
            Self::Transport(format!("invalid request: {err}"))
        } else {
            Self::Transport(err.to_string())
        }
    }
}
