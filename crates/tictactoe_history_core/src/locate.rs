//! Locating the cell changed by a move.

use tracing::instrument;

use crate::error::LocateError;
use crate::types::{BOARD_CELLS, Board, Player, col_of, row_of};

/// Where a move was played, in 1-based display coordinates.
///
/// The game-start entry carries the sentinel `(-1, -1)` and no player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// Row, 1-based, or -1 for game start.
    pub row: i32,
    /// Column, 1-based, or -1 for game start.
    pub col: i32,
    /// Player who made the move.
    pub player: Option<Player>,
}

impl Location {
    /// Sentinel for the game-start entry.
    pub const GAME_START: Location = Location {
        row: -1,
        col: -1,
        player: None,
    };

    /// Builds the location of a move on `index` by `player`.
    pub fn of_index(index: usize, player: Option<Player>) -> Self {
        Self {
            row: row_of(index) as i32 + 1,
            col: col_of(index) as i32 + 1,
            player,
        }
    }

    /// Checks if this is the game-start sentinel.
    pub fn is_game_start(&self) -> bool {
        *self == Self::GAME_START
    }
}

/// Finds the cell that changed between snapshot `move_index - 1` and `move_index`.
///
/// Index 0 always yields [`Location::GAME_START`]. If several cells differ,
/// the last one in board order is reported.
///
/// # Errors
///
/// Returns [`LocateError::NoDifference`] when the two snapshots are equal and
/// [`LocateError::OutOfRange`] when `move_index` is past the end of history.
/// Both mean the history is corrupted.
#[instrument(level = "trace", skip(snapshots), fields(len = snapshots.len()))]
pub fn locate(snapshots: &[Board], move_index: usize) -> Result<Location, LocateError> {
    if move_index >= snapshots.len() {
        return Err(LocateError::OutOfRange {
            move_index,
            len: snapshots.len(),
        });
    }
    if move_index == 0 {
        return Ok(Location::GAME_START);
    }

    let previous = &snapshots[move_index - 1];
    let current = &snapshots[move_index];
    let changed = (0..BOARD_CELLS)
        .rev()
        .find(|&index| previous.get(index) != current.get(index))
        .ok_or(LocateError::NoDifference { move_index })?;

    let player = current.get(changed).and_then(|cell| cell.player());
    Ok(Location::of_index(changed, player))
}
