//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare-style: {P} action {Q}.

use super::GameHistory;
use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use tracing::instrument;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: no line is complete and the board is not full.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a concluded snapshot.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory) -> Result<(), MoveError> {
        if history.status().is_concluded() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied cell.
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &GameHistory) -> Result<(), MoveError> {
        if history.current().board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: the mark must belong to the player whose turn it is.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the wrong player.
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &GameHistory) -> Result<(), MoveError> {
        if mov.mark == history.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.mark))
        }
    }
}

/// Composite precondition for a legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, game-over first.
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &GameHistory) -> Result<(), MoveError> {
        GameNotOver::check(history)?;
        SquareIsEmpty::check(mov, history)?;
        PlayersTurn::check(mov, history)?;
        Ok(())
    }
}

/// Contract for applying a move to a history.
///
/// Postconditions:
/// - Exactly one cell differs from the board the move was played on
/// - The history ends at the new snapshot, one past the old cursor
/// - Every history invariant holds
pub struct MoveContract;

impl Contract<GameHistory, Move> for MoveContract {
    fn pre(history: &GameHistory, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, history)
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), MoveError> {
        let changed = before.current().board().diff(after.current().board());
        if changed.len() != 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {} cells changed",
                changed.len()
            )));
        }

        if after.cursor() != before.cursor() + 1 || after.len() != after.cursor() + 1 {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history not truncated at the new move".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
