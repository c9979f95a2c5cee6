//! Move application: the turn state machine over a [`GameHistory`].

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::{GameHistory, Position};
use tracing::{info, instrument};

/// Plays the current player's mark at `position`.
///
/// On success the new snapshot is appended after the cursor, discarding
/// any snapshots past it. On error the history is unchanged.
#[instrument(skip(history), fields(cursor = history.cursor()))]
pub fn apply_move(history: &mut GameHistory, position: Position) -> Result<Move, MoveError> {
    let action = Move::new(history.to_move(), position);
    apply(history, action)
}

/// Applies an explicit move, checking that it is the mover's turn.
#[instrument(skip(history), fields(cursor = history.cursor()))]
pub fn apply(history: &mut GameHistory, action: Move) -> Result<Move, MoveError> {
    MoveContract::pre(history, &action)?;

    #[cfg(debug_assertions)]
    let before = history.clone();

    let board = history.current().board().placed(action.position, action.mark);
    history.append(board, action.position);

    #[cfg(debug_assertions)]
    if let Err(e) = MoveContract::post(&before, history) {
        *history = before;
        return Err(e);
    }

    info!(%action, cursor = history.cursor(), "Move applied");
    Ok(action)
}

impl GameHistory {
    /// Rebuilds a history by playing `moves` in order from an empty board.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut history = Self::new();
        for position in moves {
            apply_move(&mut history, *position)?;
        }
        Ok(history)
    }
}
