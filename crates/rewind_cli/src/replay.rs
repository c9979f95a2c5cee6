//! Non-interactive replay and history import.

use anyhow::{Context, Result, anyhow};
use rewind_core::{Game, GameHistory, Position};
use std::path::Path;
use tracing::{info, instrument};

/// Reads a history previously written with `replay --json`.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_history(path: impl AsRef<Path>) -> Result<GameHistory> {
    let json = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
    let history = GameHistory::from_json(&json)?;
    info!(len = history.len(), cursor = history.cursor(), "History loaded");
    Ok(history)
}

/// Plays `moves` on top of `from` (or an empty board), then jumps to `at`.
///
/// Moves are applied from the loaded cursor, so a saved history that was
/// rewound branches at that point.
#[instrument]
pub fn replay_game(from: Option<&Path>, moves: &[String], at: Option<usize>) -> Result<Game> {
    let history = match from {
        Some(path) => load_history(path)?,
        None => GameHistory::new(),
    };
    let mut game = Game::from_history(history);

    for m in moves {
        let position = Position::parse(m).ok_or_else(|| anyhow!("Invalid cell: {}", m))?;
        game.play(position).with_context(|| format!("Replay rejected move {}", m))?;
    }

    if let Some(n) = at {
        game.jump_to(n)?;
    }
    Ok(game)
}
