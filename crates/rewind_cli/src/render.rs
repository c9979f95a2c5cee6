//! Text rendering for the board, status line and move list.

use crate::config::ShellConfig;
use crate::sort::SortOrder;
use rewind_core::{Board, Cell, Game, GameStatus, MoveEntry, Position};

/// Renders game state as plain text using configured symbols.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: ShellConfig,
}

impl Renderer {
    /// Creates a renderer.
    pub fn new(config: ShellConfig) -> Self {
        Self { config }
    }

    /// Draws the grid with row letters and column numbers.
    ///
    /// Cells on a winning line are bracketed.
    pub fn board(&self, board: &Board, status: &GameStatus) -> String {
        let line = match status {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        };

        let mut out = String::from("     1   2   3\n");
        for (row, cells) in Position::ALL.chunks(3).enumerate() {
            let row_label = cells[0].row();
            let drawn: Vec<String> = cells
                .iter()
                .map(|pos| {
                    let symbol = match board.get(*pos) {
                        Cell::Empty => ".",
                        Cell::Occupied(mark) => self.config.symbol(mark),
                    };
                    if line.is_some_and(|l| l.contains(pos)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect();
            out.push_str(&format!("  {} {}\n", row_label, drawn.join("|")));
            if row < 2 {
                out.push_str("    ---+---+---\n");
            }
        }
        out
    }

    /// Status text for the current snapshot.
    pub fn status(&self, status: &GameStatus) -> String {
        match status {
            GameStatus::InProgress { next } => {
                format!("Current player: {}", self.config.symbol(*next))
            }
            GameStatus::Won { mark, .. } => format!("Winner: {}", self.config.symbol(*mark)),
            GameStatus::Draw => "Draw".to_string(),
        }
    }

    /// One line of the move list.
    pub fn entry(&self, entry: &MoveEntry) -> String {
        let label = match entry.played {
            Some(pos) => format!(" ({})", pos.label()),
            None => String::new(),
        };
        if entry.is_current {
            format!("{:>2}. You are on {}{}", entry.number, entry.description(), label)
        } else {
            format!("{:>2}. Go to {}{}", entry.number, entry.description(), label)
        }
    }

    /// The full move list in the requested order.
    pub fn moves(&self, game: &Game, order: SortOrder) -> String {
        let mut entries = game.moves();
        order.apply(&mut entries);
        entries
            .iter()
            .map(|e| self.entry(e))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Board, status and move list together.
    pub fn frame(&self, game: &Game, order: SortOrder) -> String {
        let status = game.status();
        format!(
            "{}\n{}\n\n{}\n",
            self.board(game.board(), &status),
            self.status(&status),
            self.moves(game, order)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> Renderer {
        Renderer::new(ShellConfig::default())
    }

    #[test]
    fn test_status_text() {
        let r = renderer();
        let mut game = Game::new();
        assert_eq!(r.status(&game.status()), "Current player: X");
        game.click(4);
        assert_eq!(r.status(&game.status()), "Current player: O");
    }

    #[test]
    fn test_winning_line_bracketed() {
        let r = renderer();
        let mut game = Game::new();
        for index in [0, 3, 1, 4, 2] {
            game.click(index);
        }
        let board = r.board(game.board(), &game.status());
        assert!(board.contains("[X]|[X]|[X]"));
        assert_eq!(r.status(&game.status()), "Winner: X");
    }

    #[test]
    fn test_move_list_descending() {
        let r = renderer();
        let mut game = Game::new();
        game.click(4);
        game.click(0);
        game.jump_to(1).unwrap();

        let lines = r.moves(&game, SortOrder::Descending);
        let lines: Vec<&str> = lines.lines().collect();
        assert_eq!(
            lines,
            vec![
                " 2. Go to move #2 (A1)",
                " 1. You are on move #1 (B2)",
                " 0. Go to game start",
            ]
        );
    }
}
