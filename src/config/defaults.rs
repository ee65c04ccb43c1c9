//! Default configuration values

/// Default backend base URL (unset; must be configured before any request)
pub fn default_base_url() -> String {
    String::new()
}

/// Default resource path used when a call supplies none
pub fn default_path() -> String {
    "leaderboard".to_string()
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "LEADERBOARD_BASE_URL";

/// Environment variable overriding the default path
pub const ENV_DEFAULT_PATH: &str = "LEADERBOARD_DEFAULT_PATH";
