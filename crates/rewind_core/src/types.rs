//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Mark {
    /// The first player (moves on even turns).
    PlayerA,
    /// The second player (moves on odd turns).
    PlayerB,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::PlayerA => Mark::PlayerB,
            Mark::PlayerB => Mark::PlayerA,
        }
    }

    /// Returns the mark that moves after `moves_played` successful moves.
    pub fn for_turn(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Mark::PlayerA
        } else {
            Mark::PlayerB
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Cell::Empty, Cell::Occupied)
    }
}

/// 3x3 board value.
///
/// Boards are values: placing a mark yields a new board and leaves the
/// original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from nine cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// Does not check occupancy; callers go through the move contract.
    #[instrument(skip(self))]
    pub fn placed(&self, pos: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[pos.to_index()] = Cell::Occupied(mark);
        next
    }

    /// Positions whose cells differ between `self` and `other`.
    pub fn diff(&self, other: &Board) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.get(*pos) != other.get(*pos))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_parity() {
        assert_eq!(Mark::for_turn(0), Mark::PlayerA);
        assert_eq!(Mark::for_turn(1), Mark::PlayerB);
        assert_eq!(Mark::for_turn(4), Mark::PlayerA);
        assert_eq!(Mark::for_turn(7), Mark::PlayerB);
    }

    #[test]
    fn test_placed_leaves_original_untouched() {
        let board = Board::new();
        let next = board.placed(Position::Center, Mark::PlayerA);

        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Occupied(Mark::PlayerA));
        assert_eq!(board.diff(&next), vec![Position::Center]);
    }

    #[test]
    fn test_occupied_count() {
        let board = Board::new()
            .placed(Position::TopLeft, Mark::PlayerA)
            .placed(Position::BottomRight, Mark::PlayerB);
        assert_eq!(board.occupied_count(), 2);
    }
}
