//! Status line derivation for tic-tac-toe.

use tracing::instrument;

use super::win::evaluate;
use crate::types::{BOARD_CELLS, Board, Player};

/// Read-only game status, recomputed on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Nine moves were made without a winner.
    #[display("Draw")]
    Draw,
    /// The game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Derives the status for `board` displayed at history `step`.
///
/// A draw is declared when `step` reaches the cell count. This only works
/// because placements stop once a winner exists, so step nine is always the
/// full board.
#[instrument(level = "trace")]
pub fn status(board: &Board, step: usize) -> Status {
    if let Some(winner) = evaluate(board).winner {
        Status::Winner(winner)
    } else if step == BOARD_CELLS {
        Status::Draw
    } else {
        Status::NextPlayer(Player::for_step(step))
    }
}
