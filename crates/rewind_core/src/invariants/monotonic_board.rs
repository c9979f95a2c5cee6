//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::GameHistory;

/// Invariant: each snapshot differs from its predecessor in exactly the
/// played cell, which goes from empty to occupied.
pub struct MonotonicBoardInvariant;

impl Invariant<GameHistory> for MonotonicBoardInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(played) = after.played() else {
                return false;
            };
            before.board().diff(after.board()) == [played]
                && before.board().is_empty(played)
                && !after.board().is_empty(played)
        })
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position, Snapshot};

    #[test]
    fn test_new_history_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_replayed_history_holds() {
        let history =
            GameHistory::replay(&[Position::TopLeft, Position::Center, Position::TopRight])
                .unwrap();
        assert!(MonotonicBoardInvariant::holds(&history));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut history = GameHistory::replay(&[Position::Center]).unwrap();
        let board = history
            .current()
            .board()
            .placed(Position::Center, Mark::PlayerB);
        history.snapshots.push(Snapshot::new(board, Some(Position::Center)));
        assert!(!MonotonicBoardInvariant::holds(&history));
    }

    #[test]
    fn test_wrong_played_position_violates() {
        let mut history = GameHistory::new();
        let board = history
            .current()
            .board()
            .placed(Position::Center, Mark::PlayerA);
        history.snapshots.push(Snapshot::new(board, Some(Position::TopLeft)));
        assert!(!MonotonicBoardInvariant::holds(&history));
    }
}
