//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) value. Rules are kept
//! apart from history storage so the contract layer can compose them.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::GameStatus;
pub use win::{LINES, WinResult, check_winner};
