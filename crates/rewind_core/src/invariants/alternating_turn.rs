//! Alternating turn invariant: PlayerA, PlayerB, PlayerA, ...

use super::Invariant;
use crate::{Cell, GameHistory, Mark};

/// Invariant: the cell played to reach snapshot k holds the mark of the
/// player whose turn it was after k - 1 moves.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(k, snapshot)| match snapshot.played() {
                Some(pos) => snapshot.board().get(pos) == Cell::Occupied(Mark::for_turn(k - 1)),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns starting with PlayerA"
    }
}
