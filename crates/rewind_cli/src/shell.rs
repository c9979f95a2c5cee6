//! Line-oriented shell driving a [`Game`].
//!
//! The shell redraws only when the game reports a change through its
//! observer hook, or when a view setting such as sort order changes.

use crate::render::Renderer;
use crate::sort::SortOrder;
use anyhow::{Context, Result};
use rewind_core::{Game, GameEvent, GameHistory, Position};
use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{debug, info, instrument};

/// A parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click a cell.
    Click(Position),
    /// Jump to a move number.
    Jump(usize),
    /// Toggle move list order.
    Sort,
    /// Print the move list again.
    History,
    /// Print the command summary.
    Help,
    /// Leave the shell.
    Quit,
}

impl Command {
    /// Parses one input line. Returns `None` for unknown input.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let head = words.next()?;
        let command = match head.to_ascii_lowercase().as_str() {
            "jump" | "j" => Command::Jump(words.next()?.parse().ok()?),
            "sort" | "s" => Command::Sort,
            "history" | "h" => Command::History,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => Command::Click(Position::parse(other)?),
        };
        if words.next().is_some() {
            return None;
        }
        Some(command)
    }
}

const HELP: &str = "\
Commands:
  <0-8> | <A1-C3>   play a cell
  jump <n>          go to move n (0 is game start)
  sort              toggle move list order
  history           show the move list
  quit              leave";

/// Interactive session state.
pub struct Shell {
    game: Game,
    renderer: Renderer,
    order: SortOrder,
    dirty: Rc<Cell<bool>>,
}

impl Shell {
    /// Creates a shell over `game`.
    pub fn new(mut game: Game, renderer: Renderer, order: SortOrder) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        game.subscribe(move |event: &GameEvent, _: &GameHistory| {
            debug!(?event, "Game changed");
            flag.set(true);
        });
        Self {
            game,
            renderer,
            order,
            dirty,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current move list order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Applies one command. Returns `false` when the shell should exit.
    #[instrument(skip(self, out))]
    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> Result<bool> {
        match command {
            Command::Click(pos) => {
                self.game.click(pos.to_index());
            }
            Command::Jump(n) => {
                if let Err(e) = self.game.jump_to(n) {
                    writeln!(out, "{}", e)?;
                }
            }
            Command::Sort => {
                self.order = self.order.toggle();
                info!(order = %self.order, "Sort order changed");
                self.dirty.set(true);
            }
            Command::History => {
                writeln!(out, "{}", self.renderer.moves(&self.game, self.order))?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Redraws if anything changed since the last draw.
    pub fn redraw(&mut self, out: &mut impl Write) -> Result<()> {
        if self.dirty.replace(false) {
            write!(out, "{}", self.renderer.frame(&self.game, self.order))?;
        }
        Ok(())
    }

    /// Runs the read-eval-print loop until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        self.redraw(&mut out)?;
        write!(out, "> ")?;
        out.flush().context("Failed to flush output")?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                write!(out, "> ")?;
                out.flush()?;
                continue;
            }
            match Command::parse(&line) {
                Some(command) => {
                    if !self.handle(command, &mut out)? {
                        break;
                    }
                }
                None => writeln!(out, "Unknown command. Type 'help' for a list.")?,
            }
            self.redraw(&mut out)?;
            write!(out, "> ")?;
            out.flush()?;
        }

        info!(moves = self.game.history().len() - 1, "Shell finished");
        Ok(())
    }
}
