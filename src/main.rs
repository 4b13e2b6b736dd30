//! mylogger: leveled logging to syslog with a local fallback file
//!
//! This is the entry point for the `mylogger` binary. It parses CLI
//! arguments, loads configuration, installs the global logger and logs
//! either the message given on the command line or every line of stdin.
//!
//! Diagnostics about mylogger itself go to stderr via `tracing`; they are
//! separate from the records being logged.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use mylogger::{
    cli::{Cli, for_each_input_line},
    config::ConfigLoader,
    logger::{self, Logger},
};
use tracing::{debug, warn};

fn main() -> Result<()> {
    // Parse CLI arguments first (before any other initialization)
    let cli = Cli::parse();

    let config = ConfigLoader::new()
        .load(&cli)
        .context("Failed to load configuration")?;

    init_tracing(cli.verbose, config.general.log_level.as_deref())?;
    match config.to_toml() {
        Ok(effective) => debug!("Effective configuration:\n{}", effective),
        Err(e) => debug!("Loaded configuration: {:?} ({})", config, e),
    }

    logger::install(Logger::new(config.logger_config()))
        .context("Failed to install global logger")?;
    logger::log_init(config.logger.ident.as_deref());

    match cli.joined_message() {
        Some(message) => logger::log_message(cli.priority, format_args!("{message}")),
        None => {
            let stdin = io::stdin().lock();
            let read = for_each_input_line(stdin, |line| {
                logger::log_message(cli.priority, format_args!("{line}"));
            });
            // Read errors never change the exit status.
            if let Err(e) = read {
                warn!("Stopped reading standard input: {}", e);
            }
        }
    }

    logger::log_close();
    Ok(())
}

/// Initialize the tracing subscriber for diagnostic logging.
///
/// # Verbosity Levels
/// - 0 (default): `RUST_LOG`, then `general.log_level`, then warnings only
/// - 1 (-v): Info level
/// - 2 (-vv): Debug level
/// - 3+ (-vvv): Trace level
fn init_tracing(verbose: u8, configured: Option<&str>) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or("warn"))),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}
