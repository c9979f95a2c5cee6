//! Immutable board snapshots.

use super::{Board, Position};
use serde::{Deserialize, Serialize};

/// A board plus the position played to reach it.
///
/// The initial snapshot has no played position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Snapshot {
    board: Board,
    played: Option<Position>,
}

impl Snapshot {
    /// The empty starting snapshot.
    pub fn initial() -> Self {
        Self::new(Board::new(), None)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Position played to reach this board, `None` at game start.
    pub fn played(&self) -> Option<Position> {
        self.played
    }
}
