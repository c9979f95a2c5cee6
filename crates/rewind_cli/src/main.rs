//! Rewind - terminal tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use rewind_cli::{Cli, CliCommand, Renderer, Shell, ShellConfig, load_history, replay_game};
use rewind_core::Game;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ShellConfig::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(config = %cli.config.display(), "Starting rewind");

    match cli.command {
        CliCommand::Play { from } => run_play(config, from),
        CliCommand::Replay {
            moves,
            from,
            at,
            json,
        } => run_replay(config, from.as_deref(), &moves, at, json),
    }
}

/// Runs the interactive shell on stdin/stdout.
#[instrument(skip(config))]
fn run_play(config: ShellConfig, from: Option<PathBuf>) -> Result<()> {
    let game = match from {
        Some(path) => Game::from_history(load_history(path)?),
        None => Game::new(),
    };
    let order = *config.sort_order();
    let mut shell = Shell::new(game, Renderer::new(config), order);
    let stdin = std::io::stdin();
    shell.run(stdin.lock(), std::io::stdout())
}

/// Replays `moves` and prints the final frame or JSON history.
#[instrument(skip(config))]
fn run_replay(
    config: ShellConfig,
    from: Option<&Path>,
    moves: &[String],
    at: Option<usize>,
    json: bool,
) -> Result<()> {
    let game = replay_game(from, moves, at)?;

    if json {
        println!("{}", game.history().to_json()?);
    } else {
        let order = *config.sort_order();
        print!("{}", Renderer::new(config).frame(&game, order));
    }
    Ok(())
}
