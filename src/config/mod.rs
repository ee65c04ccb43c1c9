//! Configuration management for the leaderboard client
//!
//! Handles loading, validating, and persisting the backend address and
//! request settings. The loaded [`Config`] is built once at startup and
//! handed to [`LeaderboardClient`](crate::client::LeaderboardClient).

use crate::error::{LeaderboardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::*;

/// Main client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Scheme, host and optional prefix of the backend
    #[serde(default = "defaults::default_base_url")]
    pub base_url: String,

    /// Resource path used when a call does not supply one
    #[serde(default = "defaults::default_path")]
    pub default_path: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::default_timeout")]
    pub timeout_secs: u64,

    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults; the base URL then stays empty and
    /// requests fail with a configuration error until one is set.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| LeaderboardError::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&contents).map_err(|e| LeaderboardError::InvalidConfig(e.to_string()))
    }

    /// Load configuration from `path`, falling back to the defaults
    ///
    /// A missing, unreadable, or malformed file is logged and replaced by
    /// [`Config::default`].
    pub fn load_or_default_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(path).unwrap_or_else(|err| {
            log::warn!("Ignoring existing config at {}: {err}", path.display());
            Self::default()
        })
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| LeaderboardError::ConfigWrite {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| LeaderboardError::InvalidConfig(e.to_string()))?;

        fs::write(path, contents).map_err(|e| LeaderboardError::ConfigWrite {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Get the path to the config file
    ///
    /// 1. `$XDG_CONFIG_HOME/leaderboard/config.toml`
    /// 2. `~/.config/leaderboard/config.toml`
    pub fn config_path() -> Result<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

        config_home
            .ok_or_else(|| {
                LeaderboardError::Internal(
                    "Could not determine config directory: XDG_CONFIG_HOME not set and no home directory found"
                        .to_string(),
                )
            })
            .map(|path| path.join("leaderboard").join("config.toml"))
    }

    /// Apply `LEADERBOARD_BASE_URL` / `LEADERBOARD_DEFAULT_PATH` overrides
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(ENV_BASE_URL).ok(),
            std::env::var(ENV_DEFAULT_PATH).ok(),
        );
    }

    /// Override the base URL and default path; empty values are ignored
    pub fn apply_overrides(&mut self, base_url: Option<String>, default_path: Option<String>) {
        if let Some(url) = base_url.filter(|url| !url.is_empty()) {
            self.base_url = url;
        }
        if let Some(path) = default_path.filter(|path| !path.is_empty()) {
            self.default_path = path;
        }
    }

    /// Validate configuration
    ///
    /// An empty base URL is allowed here; it is reported per request.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(LeaderboardError::InvalidConfig(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !self.base_url.is_empty()
            && !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://"))
        {
            return Err(LeaderboardError::InvalidConfig(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_path: default_path(),
            timeout_secs: default_timeout(),
            verbose: false,
        }
    }
}
