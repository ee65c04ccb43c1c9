//! Logging setup
//!
//! The library logs through the `log` facade; the binary installs an
//! `env_logger` backend here. `RUST_LOG` takes precedence over the level
//! picked from `--verbose`.

use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Initialize the global logger; later calls are ignored
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let installed = Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .try_init();

    if installed.is_err() {
        log::debug!("Logger already initialized");
    }
}
