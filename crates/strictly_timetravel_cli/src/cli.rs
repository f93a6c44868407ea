//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with undo to any earlier move
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Two-player tic-tac-toe with full move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Display config file (TOML). Falls back to ./timetravel.toml, then defaults.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play,

    /// Apply a fixed sequence of moves and print the result
    Replay {
        /// Cell indices (0-8), comma separated
        #[arg(short, long, value_delimiter = ',', num_args = 0..)]
        moves: Vec<usize>,

        /// Jump back to this history index after the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print status and move list as JSON
        #[arg(long)]
        json: bool,
    },
}
