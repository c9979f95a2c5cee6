//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
///
/// Order matters: when several lines are complete the first one listed wins.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of checking a board for a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinResult {
    /// No line is complete. A full board with this result is a draw.
    NoWinner,
    /// A line is complete.
    Winner {
        /// Mark occupying the line.
        mark: Mark,
        /// The three positions forming the line.
        line: [Position; 3],
    },
}

impl WinResult {
    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            WinResult::NoWinner => None,
            WinResult::Winner { mark, .. } => Some(*mark),
        }
    }

    /// Returns true if a line is complete.
    pub fn is_winner(&self) -> bool {
        matches!(self, WinResult::Winner { .. })
    }
}

/// Checks if there is a completed line on the board.
#[instrument]
pub fn check_winner(board: &Board) -> WinResult {
    for line in LINES {
        let [a, b, c] = line;
        if let Cell::Occupied(mark) = board.get(a)
            && board.get(b) == Cell::Occupied(mark)
            && board.get(c) == Cell::Occupied(mark)
        {
            return WinResult::Winner { mark, line };
        }
    }

    WinResult::NoWinner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(marks: [Option<Mark>; 9]) -> Board {
        Board::from_cells(marks.map(Cell::from))
    }

    const A: Option<Mark> = Some(Mark::PlayerA);
    const B: Option<Mark> = Some(Mark::PlayerB);

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), WinResult::NoWinner);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_of([A, A, A, None, None, None, None, None, None]);
        assert_eq!(
            check_winner(&board),
            WinResult::Winner {
                mark: Mark::PlayerA,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_of([A, A, B, None, B, None, B, None, A]);
        assert_eq!(
            check_winner(&board),
            WinResult::Winner {
                mark: Mark::PlayerB,
                line: [Position::TopRight, Position::Center, Position::BottomLeft],
            }
        );
    }

    #[test]
    fn test_full_board_draw_has_no_winner() {
        let board = board_of([A, B, A, B, A, B, B, A, B]);
        assert_eq!(check_winner(&board), WinResult::NoWinner);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column are both complete; rows come first.
        let board = board_of([A, A, A, A, None, None, A, None, None]);
        let result = check_winner(&board);
        assert_eq!(
            result,
            WinResult::Winner {
                mark: Mark::PlayerA,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_of([A, B, A, None, None, None, None, None, None]);
        assert!(!check_winner(&board).is_winner());
    }
}
