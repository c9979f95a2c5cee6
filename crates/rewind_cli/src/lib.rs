//! Rewind CLI - terminal shell for time-travel tic-tac-toe
//!
//! Renders a [`rewind_core::Game`] as text and maps typed commands onto
//! clicks, jumps and view toggles.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod replay;
mod shell;
mod sort;

pub use cli::{Cli, Command as CliCommand};
pub use config::{ConfigError, ShellConfig};
pub use render::Renderer;
pub use replay::{load_history, replay_game};
pub use shell::{Command, Shell};
pub use sort::SortOrder;
