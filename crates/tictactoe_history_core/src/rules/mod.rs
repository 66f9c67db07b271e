//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from history storage so the view layer can query
//! them on every render without touching game state.

pub mod status;
pub mod win;

pub use status::{Status, status};
pub use win::{Evaluation, WINNING_LINES, WinningLine, evaluate};
