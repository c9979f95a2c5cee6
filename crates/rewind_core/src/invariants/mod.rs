//! First-class invariants for tic-tac-toe histories.
//!
//! Invariants are logical properties that must hold for every history the
//! crate hands out. They are checked after moves in debug builds and when
//! importing a history from JSON.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not only the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod alternating_turn;
pub mod cursor_in_bounds;
pub mod history_consistent;
pub mod monotonic_board;
pub mod terminal_conclusion;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use terminal_conclusion::TerminalConclusionInvariant;

/// All history invariants as a composable set.
pub type TicTacToeInvariants = (
    CursorInBoundsInvariant,
    HistoryConsistentInvariant,
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    TerminalConclusionInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameHistory, Mark, Position, Snapshot};

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(TicTacToeInvariants::check_all(&GameHistory::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_replay() {
        let history =
            GameHistory::replay(&[Position::TopLeft, Position::Center, Position::TopRight])
                .unwrap();
        assert!(TicTacToeInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut history = GameHistory::new();
        // Two cells filled in one step by the wrong player.
        let board = Board::new()
            .placed(Position::TopLeft, Mark::PlayerB)
            .placed(Position::Center, Mark::PlayerB);
        history.snapshots.push(Snapshot::new(board, Some(Position::Center)));

        let violations = TicTacToeInvariants::check_all(&history).unwrap_err();
        assert!(violations.len() >= 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (CursorInBoundsInvariant, MonotonicBoardInvariant);
        assert!(TwoInvariants::check_all(&GameHistory::new()).is_ok());
    }
}
