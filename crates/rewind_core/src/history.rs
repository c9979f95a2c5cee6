//! Snapshot history with a time-travel cursor.
//!
//! The history starts with one empty snapshot. Appending after a seek
//! drops every snapshot past the cursor, so there is no redo once a new
//! branch is played.

use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules::GameStatus;
use super::{Board, Mark, Position, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Errors raised by history navigation and import.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// Seek target past the end of the history.
    #[display("Move {} does not exist (history has {} snapshots)", requested, len)]
    MoveOutOfRange {
        /// Requested move number.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },

    /// Input could not be parsed.
    #[display("Malformed history: {}", _0)]
    Malformed(String),

    /// Input parsed but breaks a history invariant.
    #[display("Inconsistent history: {}", _0)]
    Inconsistent(String),

    /// The history could not be written out.
    #[display("Failed to serialize history: {}", _0)]
    Serialize(String),
}

impl std::error::Error for HistoryError {}

/// Ordered snapshots plus a cursor selecting the current one.
///
/// Always holds at least one snapshot and `cursor < len()`. Deserialized
/// histories are checked against every history invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Snapshot>,
    pub(crate) cursor: usize,
}

/// Unchecked wire shape of a [`GameHistory`].
#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl TryFrom<RawHistory> for GameHistory {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = Self {
            snapshots: raw.snapshots,
            cursor: raw.cursor,
        };

        TicTacToeInvariants::check_all(&history).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            HistoryError::Inconsistent(descriptions)
        })?;

        Ok(history)
    }
}

impl GameHistory {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            cursor: 0,
        }
    }

    /// Appends a snapshot after the cursor, discarding any later snapshots.
    #[instrument(skip(self, board), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn append(&mut self, board: Board, played: Position) {
        let dropped = self.snapshots.len() - (self.cursor + 1);
        if dropped > 0 {
            debug!(dropped, "Truncating future snapshots");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(Snapshot::new(board, Some(played)));
        self.cursor = self.snapshots.len() - 1;
    }

    /// Moves the cursor to snapshot `mv`.
    ///
    /// Leaves the cursor untouched if `mv` is out of range.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn seek(&mut self, mv: usize) -> Result<(), HistoryError> {
        if mv >= self.snapshots.len() {
            warn!("Seek past end of history");
            return Err(HistoryError::MoveOutOfRange {
                requested: mv,
                len: self.snapshots.len(),
            });
        }
        self.cursor = mv;
        Ok(())
    }

    /// Returns the snapshot under the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true; a history always holds the starting board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots in play order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Mark to move at the cursor.
    pub fn to_move(&self) -> Mark {
        Mark::for_turn(self.cursor)
    }

    /// Status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.current().board(), self.cursor)
    }

    /// Serializes the history as JSON.
    #[instrument(skip(self))]
    pub fn to_json(&self) -> Result<String, HistoryError> {
        serde_json::to_string_pretty(self).map_err(|e| HistoryError::Serialize(e.to_string()))
    }

    /// Parses a history from JSON, rejecting any that breaks an invariant.
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        let raw: RawHistory =
            serde_json::from_str(json).map_err(|e| HistoryError::Malformed(e.to_string()))?;
        Self::try_from(raw)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
