//! Leaderboard CLI - submit and list scores on a remote leaderboard backend

#![allow(clippy::print_stdout, clippy::print_stderr)] // Binary entry point reports to the terminal

use leaderboard_client::cli::{Cli, Commands};
use leaderboard_client::commands;
use leaderboard_client::{logging, Config, LeaderboardClient, LeaderboardError};

#[tokio::main]
async fn main() {
    let exit_code = run().await;
    std::process::exit(exit_code);
}

/// Main application entry point
async fn run() -> i32 {
    let cli = Cli::parse_args();

    match execute(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err}");
            err.downcast_ref::<LeaderboardError>()
                .map_or(1, LeaderboardError::exit_code)
        }
    }
}

/// Execute the requested command
///
/// Only `list` and `submit` read the config file, so a broken file never
/// blocks `configure` or `version`.
async fn execute(cli: Cli) -> anyhow::Result<()> {
    cli.validate()?;

    if cli.verbose {
        println!("Leaderboard CLI v{}", leaderboard_client::VERSION);
    }

    let path = cli.path.as_deref();

    match cli.command {
        Commands::Configure {
            url,
            default_path,
            timeout,
        } => {
            logging::init(cli.verbose);
            commands::configure(&Config::config_path()?, url, default_path, timeout)
        }
        Commands::List => {
            let client = connect(cli.verbose, cli.base_url)?;
            commands::list_entries(&client, path).await
        }
        Commands::Submit {
            name,
            score,
            id,
            timestamp,
            no_refresh,
        } => {
            let entry = commands::entry_from_args(name, score, id, timestamp.as_deref())?;
            let client = connect(cli.verbose, cli.base_url)?;
            commands::submit_entry(&client, entry, path, !no_refresh).await
        }
        Commands::Version => {
            println!("{} {}", leaderboard_client::NAME, leaderboard_client::VERSION);
            Ok(())
        }
    }
}

/// Load the config, apply environment and flag overrides, then build the client
fn connect(verbose: bool, base_url: Option<String>) -> anyhow::Result<LeaderboardClient> {
    let mut config = Config::load()?;
    logging::init(verbose || config.verbose);

    config.apply_env();
    config.apply_overrides(base_url, None);
    config.validate()?;
    log::debug!(
        "Using base URL '{}' and default path '{}'",
        config.base_url,
        config.default_path
    );

    Ok(LeaderboardClient::from_config(&config)?)
}
