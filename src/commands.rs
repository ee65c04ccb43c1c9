//! Command implementations for the `leaderboard` binary
//!
//! Commands use the strict client calls so transport and backend failures
//! reach `main` and set the exit code.

#![allow(clippy::print_stdout)] // Printing results is what these commands do

use crate::client::{LeaderboardClient, Transport};
use crate::config::Config;
use crate::entry::Entry;
use crate::error::LeaderboardError;
use anyhow::Result;
use chrono::{DateTime, Utc};
use console::style;
use std::path::Path;

/// Fetch and print the leaderboard
pub async fn list_entries<T: Transport>(client: &LeaderboardClient<T>, path: Option<&str>) -> Result<()> {
    println!("📋 Fetching leaderboard...\n");

    let body = client.try_get(path).await?;
    let entries = Entry::parse_list(&body)?;
    if entries.is_empty() {
        println!("No entries yet.");
        return Ok(());
    }

    println!("Found {} entr{}:\n", entries.len(), if entries.len() == 1 { "y" } else { "ies" });
    for (index, entry) in entries.iter().enumerate() {
        println!("{}", format_row(index + 1, entry));
    }

    Ok(())
}

/// Validate and submit one entry, optionally refreshing the list afterwards
pub async fn submit_entry<T: Transport>(
    client: &LeaderboardClient<T>,
    entry: Entry,
    path: Option<&str>,
    refresh: bool,
) -> Result<()> {
    validate_entry(&entry)?;

    println!(
        "{} Submitting {} with score {}",
        style("→").cyan(),
        style(&entry.name).bold(),
        entry.score
    );

    let body = client.try_post(&entry.to_field_map(), path).await?;
    println!("{} Submitted: {}", style("✓").green(), body.trim());

    if refresh {
        println!();
        list_entries(client, path).await?;
    }

    Ok(())
}

/// Store backend settings in the config file at `config_path`
///
/// An unreadable or malformed existing file is replaced, so this command
/// can repair a broken configuration.
pub fn configure(
    config_path: &Path,
    base_url: String,
    default_path: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<()> {
    let mut config = Config::load_or_default_from(config_path);
    config.base_url = base_url;
    if let Some(path) = default_path {
        config.default_path = path;
    }
    if let Some(timeout) = timeout_secs {
        config.timeout_secs = timeout;
    }
    config.validate()?;

    config.save_to(config_path)?;
    println!("✓ Configuration saved to: {}", config_path.display());
    println!("{} {}", style("Base URL:").bold(), config.base_url);
    println!("{} {}", style("Default path:").bold(), config.default_path);

    Ok(())
}

/// Build an entry from command-line values
pub fn entry_from_args(
    name: String,
    score: f64,
    id: Option<String>,
    timestamp: Option<&str>,
) -> std::result::Result<Entry, LeaderboardError> {
    let mut entry = Entry::new(name, score);
    if let Some(id) = id.filter(|id| !id.is_empty()) {
        entry = entry.with_id(id);
    }
    if let Some(raw) = timestamp {
        let parsed = DateTime::parse_from_rfc3339(raw).map_err(|e| {
            LeaderboardError::InvalidArgument(format!("timestamp '{raw}' is not RFC 3339: {e}"))
        })?;
        entry = entry.with_timestamp(parsed.with_timezone(&Utc));
    }
    Ok(entry)
}

fn validate_entry(entry: &Entry) -> std::result::Result<(), LeaderboardError> {
    if entry.name.trim().is_empty() {
        return Err(LeaderboardError::InvalidArgument(
            "name must not be empty".to_string(),
        ));
    }
    if !entry.score.is_finite() {
        return Err(LeaderboardError::InvalidArgument(format!(
            "score must be a finite number, got {}",
            entry.score
        )));
    }
    Ok(())
}

fn format_row(rank: usize, entry: &Entry) -> String {
    let mut row = format!(
        "{:>3}. {} {:>12}",
        rank,
        style(format!("{:<24}", entry.name)).bold(),
        entry.score
    );
    if let Some(ts) = entry.timestamp {
        row.push_str(&format!("   {}", ts.format("%Y-%m-%d %H:%M")));
    }
    row
}
