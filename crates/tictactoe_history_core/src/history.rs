//! Board snapshot history.

use tracing::instrument;

use crate::error::{HistoryError, LocateError};
use crate::locate::{Location, locate};
use crate::types::{BOARD_CELLS, Board, Player};

/// Ordered board snapshots from game start to the latest move.
///
/// Never empty: the first snapshot is always the empty board, and each
/// following snapshot marks exactly one more cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Builds a history from raw snapshots, checking every transition.
    ///
    /// # Errors
    ///
    /// Returns the first [`HistoryError`] found by [`History::verify`].
    #[instrument(skip(snapshots), fields(len = snapshots.len()))]
    pub fn from_snapshots(snapshots: Vec<Board>) -> Result<Self, HistoryError> {
        let history = Self { snapshots };
        history.verify()?;
        Ok(history)
    }

    /// Builds a history without verifying it, for exercising corrupted input.
    #[cfg(any(test, feature = "testing"))]
    pub fn from_snapshots_unchecked(snapshots: Vec<Board>) -> Self {
        Self { snapshots }
    }

    /// Number of snapshots, including game start.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns all snapshots.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// Index of the latest snapshot.
    pub fn last_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Locates the move recorded at `move_index`.
    ///
    /// # Errors
    ///
    /// See [`locate`].
    pub fn locate(&self, move_index: usize) -> Result<Location, LocateError> {
        locate(&self.snapshots, move_index)
    }

    /// Returns a new history that keeps snapshots `0..=step` and appends `next`.
    ///
    /// Snapshots after `step` are discarded.
    #[instrument(level = "debug", skip(self, next), fields(len = self.len()))]
    pub fn branch(&self, step: usize, next: Board) -> Self {
        let keep = (step + 1).min(self.snapshots.len());
        let mut snapshots = Vec::with_capacity(keep + 1);
        snapshots.extend_from_slice(&self.snapshots[..keep]);
        snapshots.push(next);
        Self { snapshots }
    }

    /// Checks that each snapshot marks exactly one new cell for the player to move.
    ///
    /// # Errors
    ///
    /// Returns the first violation in history order.
    pub fn verify(&self) -> Result<(), HistoryError> {
        let first = self.snapshots.first().ok_or(HistoryError::Empty)?;
        if first.marked_count() != 0 {
            return Err(HistoryError::NonEmptyStart);
        }

        for (offset, pair) in self.snapshots.windows(2).enumerate() {
            let index = offset + 1;
            let (previous, current) = (&pair[0], &pair[1]);
            let changed: Vec<usize> = (0..BOARD_CELLS)
                .filter(|&cell| previous.get(cell) != current.get(cell))
                .collect();

            let [cell] = changed.as_slice() else {
                return Err(HistoryError::ChangedCells {
                    index,
                    changed: changed.len(),
                });
            };
            if !previous.is_empty(*cell) {
                return Err(HistoryError::Overwrite { index, cell: *cell });
            }

            let expected = Player::for_step(offset);
            if let Some(found) = current.get(*cell).and_then(|c| c.player())
                && found != expected
            {
                return Err(HistoryError::WrongPlayer {
                    index,
                    expected,
                    found,
                });
            }
        }

        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
