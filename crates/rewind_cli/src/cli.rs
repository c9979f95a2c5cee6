//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the shell config file
    #[arg(long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively
    Play {
        /// Resume from a history written by `replay --json`
        #[arg(long)]
        from: Option<PathBuf>,
    },

    /// Replay a sequence of moves and print the result
    Replay {
        /// Cells to play in order, as indices (0-8) or labels (A1-C3)
        moves: Vec<String>,

        /// Start from a history written by `replay --json`
        #[arg(long)]
        from: Option<PathBuf>,

        /// Jump to this move after replaying
        #[arg(long)]
        at: Option<usize>,

        /// Print the history as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}
