//! Pure tic-tac-toe logic with move history and time travel.
//!
//! The crate has no rendering dependencies. A view layer owns a
//! [`GameState`], feeds it [`Action`]s, and reads derived data back out:
//!
//! - [`evaluate`] finds the winner and winning line of a board.
//! - [`locate`] finds which cell a history entry changed.
//! - [`GameState::status`] renders the status line.
//!
//! # Example
//!
//! ```
//! use tictactoe_history_core::{Action, GameState, Player, Status};
//!
//! let mut state = GameState::new();
//! for index in [0, 4, 1, 3, 2] {
//!     state.dispatch(Action::PlaceMark(index));
//! }
//! assert_eq!(state.status(), Status::Winner(Player::X));
//! assert_eq!(state.evaluation().line, Some([0, 1, 2]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
mod invariants;
mod locate;
mod rules;
mod state;
mod types;

pub use error::{HistoryError, LocateError};
pub use history::History;
pub use invariants::{
    GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, StepInRangeInvariant,
};
pub use locate::{Location, locate};
pub use rules::{Evaluation, Status, WINNING_LINES, WinningLine, evaluate, status};
pub use state::{Action, GameState, Outcome, Rejection, Transition};
pub use types::{BOARD_CELLS, BOARD_SIZE, Board, Cell, Player, col_of, row_of};
