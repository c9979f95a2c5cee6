//! Board positions and their display labels.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row letter: `A` for the top row through `C` for the bottom.
    pub fn row(self) -> char {
        match self.to_index() / 3 {
            0 => 'A',
            1 => 'B',
            _ => 'C',
        }
    }

    /// Column number, 1-based.
    pub fn column(self) -> usize {
        self.to_index() % 3 + 1
    }

    /// Grid label such as `A1` or `C3`.
    pub fn label(self) -> String {
        format!("{}{}", self.row(), self.column())
    }

    /// Parses a board index (`0`-`8`) or a grid label (`b2`, case-insensitive).
    #[instrument]
    pub fn parse(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let mut chars = s.chars();
        let (Some(row), Some(col), None) = (chars.next(), chars.next(), chars.next()) else {
            return None;
        };
        let row = match row.to_ascii_uppercase() {
            'A' => 0,
            'B' => 1,
            'C' => 2,
            _ => return None,
        };
        let col = col.to_digit(10).filter(|c| (1..=3).contains(c))? as usize - 1;
        Self::from_index(row * 3 + col)
    }

    /// Filters positions by board state - returns only empty cells.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_labels() {
        assert_eq!(Position::TopLeft.label(), "A1");
        assert_eq!(Position::MiddleRight.label(), "B3");
        assert_eq!(Position::BottomCenter.label(), "C2");
    }

    #[test]
    fn test_parse_index_and_label() {
        assert_eq!(Position::parse("4"), Some(Position::Center));
        assert_eq!(Position::parse("c1"), Some(Position::BottomLeft));
        assert_eq!(Position::parse(" A3 "), Some(Position::TopRight));
        assert_eq!(Position::parse("9"), None);
        assert_eq!(Position::parse("d1"), None);
        assert_eq!(Position::parse("a4"), None);
        assert_eq!(Position::parse("a12"), None);
    }

    #[test]
    fn test_index_roundtrip_matches_enum_order() {
        for (i, pos) in <Position as strum::IntoEnumIterator>::iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
    }

    #[test]
    fn test_valid_moves_filters_occupied() {
        let board = Board::new().placed(Position::Center, Mark::PlayerA);
        let valid = Position::valid_moves(&board);
        assert_eq!(valid.len(), 8);
        assert!(!valid.contains(&Position::Center));
    }
}
