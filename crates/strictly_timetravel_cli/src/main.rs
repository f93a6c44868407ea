//! Strictly Timetravel - terminal driver
//!
//! Thin view layer over the `strictly_timetravel` game engine.

#![warn(missing_docs)]

mod cli;
mod config;
mod render;
mod replay;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::DisplayConfig;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file (RUST_LOG may live there)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // The filter comes from the config, so loading runs before a subscriber exists
    let config = DisplayConfig::load(cli.config.as_deref())?;
    initialize_tracing(config.log_filter());
    info!(?config, path = ?cli.config, "Display config loaded");

    match cli.command {
        Command::Play => {
            info!("Starting interactive session");
            let stdin = std::io::stdin();
            session::run(stdin.lock(), std::io::stdout(), &config)
        }
        Command::Replay { moves, jump, json } => {
            replay::run(&moves, jump, json, &config, std::io::stdout().lock())
        }
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
#[instrument]
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
