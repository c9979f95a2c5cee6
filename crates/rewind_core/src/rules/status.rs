//! Game status derived from a board and the turn count.

use super::{WinResult, check_winner, is_full};
use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Where the game stands for a given snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress {
        /// Mark that moves next.
        next: Mark,
    },
    /// A line is complete.
    Won {
        /// Winning mark.
        mark: Mark,
        /// Winning line.
        line: [Position; 3],
    },
    /// Board full with no completed line.
    Draw,
}

impl GameStatus {
    /// Evaluates `board` reached after `moves_played` moves.
    #[instrument]
    pub fn evaluate(board: &Board, moves_played: usize) -> Self {
        match check_winner(board) {
            WinResult::Winner { mark, line } => GameStatus::Won { mark, line },
            WinResult::NoWinner if is_full(board) => GameStatus::Draw,
            WinResult::NoWinner => GameStatus::InProgress {
                next: Mark::for_turn(moves_played),
            },
        }
    }

    /// Terminal states accept no further moves.
    pub fn is_concluded(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(
            GameStatus::evaluate(&Board::new(), 0),
            GameStatus::InProgress { next: Mark::PlayerA }
        );
    }

    #[test]
    fn test_next_follows_parity() {
        let board = Board::new().placed(Position::Center, Mark::PlayerA);
        let status = GameStatus::evaluate(&board, 1);
        assert_eq!(status, GameStatus::InProgress { next: Mark::PlayerB });
        assert!(!status.is_concluded());
    }

    #[test]
    fn test_won_is_concluded() {
        let board = Board::new()
            .placed(Position::TopLeft, Mark::PlayerB)
            .placed(Position::MiddleLeft, Mark::PlayerB)
            .placed(Position::BottomLeft, Mark::PlayerB);
        let status = GameStatus::evaluate(&board, 5);
        assert!(status.is_concluded());
        assert_eq!(status.winner(), Some(Mark::PlayerB));
    }
}
