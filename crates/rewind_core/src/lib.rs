//! Rewind core - tic-tac-toe with time travel
//!
//! Pure game logic for a 3x3 tic-tac-toe board whose every position is
//! kept as an immutable snapshot. A cursor selects the current snapshot,
//! so a shell can jump back to any earlier board and branch from it.
//!
//! # Architecture
//!
//! - **Rules**: win and draw detection over a [`Board`] value
//! - **History**: snapshots plus cursor, truncate-on-append
//! - **Contracts**: move preconditions and postconditions
//! - **Invariants**: properties every history satisfies
//! - **Game**: session wrapper with change observers
//!
//! # Example
//!
//! ```
//! use rewind_core::{Game, GameStatus, Mark};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.click(index);
//! }
//! assert_eq!(game.status().winner(), Some(Mark::PlayerA));
//!
//! game.jump_to(2).unwrap();
//! assert_eq!(game.status(), GameStatus::InProgress { next: Mark::PlayerA });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod history;
mod play;
mod position;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use game::{Game, GameEvent, GameObserver, MoveEntry};
pub use history::{GameHistory, HistoryError};
pub use invariants::{
    AlternatingTurnInvariant, CursorInBoundsInvariant, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant, TerminalConclusionInvariant,
    TicTacToeInvariants,
};
pub use play::{apply, apply_move};
pub use position::Position;
pub use rules::{GameStatus, LINES, WinResult, check_winner, is_draw, is_full};
pub use snapshot::Snapshot;
pub use types::{Board, Cell, Mark};
