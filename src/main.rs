//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `url_verdict` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Fail-fast model loading
//! - Starting the API server
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use url_verdict::{init_logger_with, run_server, AppState, Config, Detector};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // The process refuses to start without both pre-fit artifacts.
    let detector = match Detector::from_config(&config) {
        Ok(detector) => detector,
        Err(e) => {
            eprintln!("url_verdict error: failed to initialize detector: {e:#}");
            process::exit(1);
        }
    };

    let state = AppState {
        detector: Arc::new(detector),
    };

    if let Err(e) = run_server(config.port, state).await {
        eprintln!("url_verdict error: {e:#}");
        process::exit(1);
    }

    Ok(())
}
