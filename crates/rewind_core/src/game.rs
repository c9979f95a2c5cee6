//! Game session: owns the history and tells observers about changes.
//!
//! This is the surface a UI shell drives. Clicks that break a rule are
//! silently ignored; observers only hear about real state changes.

use super::action::{Move, MoveError};
use super::history::{GameHistory, HistoryError};
use super::play::apply_move;
use super::rules::GameStatus;
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A state change in a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was played and appended to the history.
    Played {
        /// Move number of the new snapshot.
        move_number: usize,
        /// Position played.
        position: Position,
        /// Mark placed.
        mark: Mark,
    },
    /// The cursor moved to another snapshot.
    Jumped {
        /// New cursor position.
        cursor: usize,
    },
}

/// Receives [`GameEvent`]s after each state change.
pub trait GameObserver {
    /// Called once per change, after the history is updated.
    fn on_event(&mut self, event: &GameEvent, history: &GameHistory);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent, &GameHistory),
{
    fn on_event(&mut self, event: &GameEvent, history: &GameHistory) {
        self(event, history)
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Snapshot index (0 is game start).
    pub number: usize,
    /// Position played to reach this snapshot.
    pub played: Option<Position>,
    /// True for the snapshot under the cursor.
    pub is_current: bool,
}

impl MoveEntry {
    /// "game start" for the first entry, "move #n" after that.
    pub fn description(&self) -> String {
        if self.number == 0 {
            "game start".to_string()
        } else {
            format!("move #{}", self.number)
        }
    }
}

/// A tic-tac-toe session with time travel.
#[derive(Default)]
pub struct Game {
    history: GameHistory,
    observers: Vec<Box<dyn GameObserver>>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Game {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes a game from an existing history.
    pub fn from_history(history: GameHistory) -> Self {
        Self {
            history,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for future changes.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Handles a click on cell `index` (0-8).
    ///
    /// Returns `true` if a move was played. Out-of-range indices, occupied
    /// cells and clicks after the game concluded are ignored.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn click(&mut self, index: usize) -> bool {
        let result = Position::from_index(index)
            .ok_or(MoveError::OutOfBounds(index))
            .and_then(|pos| self.play(pos));

        match result {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "Ignoring click");
                false
            }
        }
    }

    /// Plays the current player's mark at `position`.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn play(&mut self, position: Position) -> Result<Move, MoveError> {
        let mv = apply_move(&mut self.history, position)?;
        self.notify(GameEvent::Played {
            move_number: self.history.cursor(),
            position: mv.position,
            mark: mv.mark,
        });
        Ok(mv)
    }

    /// Moves the cursor to snapshot `mv`.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, mv: usize) -> Result<(), HistoryError> {
        if mv == self.history.cursor() {
            return Ok(());
        }
        self.history.seek(mv)?;
        info!(cursor = mv, "Jumped");
        self.notify(GameEvent::Jumped { cursor: mv });
        Ok(())
    }

    /// Board under the cursor.
    pub fn board(&self) -> &Board {
        self.history.current().board()
    }

    /// Status of the board under the cursor.
    pub fn status(&self) -> GameStatus {
        self.history.status()
    }

    /// Mark to move at the cursor.
    pub fn to_move(&self) -> Mark {
        self.history.to_move()
    }

    /// Full history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Move list entries in play order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        self.history
            .snapshots()
            .iter()
            .enumerate()
            .map(|(number, snapshot)| MoveEntry {
                number,
                played: snapshot.played(),
                is_current: number == self.history.cursor(),
            })
            .collect()
    }

    fn notify(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event, &self.history);
        }
    }
}
