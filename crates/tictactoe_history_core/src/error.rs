//! Error types for history consistency.
//!
//! These errors signal a corrupted history. They are never produced by
//! ordinary play; a rejected move is reported through
//! [`Rejection`](crate::Rejection) instead.

use derive_more::{Display, Error};

use crate::types::Player;

/// Failure to locate the cell changed by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum LocateError {
    /// The snapshot is identical to its predecessor.
    #[display("Snapshot {} does not differ from the previous snapshot", move_index)]
    NoDifference {
        /// Index of the offending snapshot.
        move_index: usize,
    },
    /// The requested move is past the end of history.
    #[display("Move {} is outside a history of {} snapshots", move_index, len)]
    OutOfRange {
        /// Requested move index.
        move_index: usize,
        /// Number of snapshots in history.
        len: usize,
    },
}

/// A history that breaks the one-mark-per-snapshot rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// History holds no snapshots.
    #[display("History is empty")]
    Empty,
    /// The first snapshot already has marks on it.
    #[display("First snapshot is not an empty board")]
    NonEmptyStart,
    /// A snapshot changes a number of cells other than one.
    #[display("Snapshot {} changes {} cells", index, changed)]
    ChangedCells {
        /// Index of the offending snapshot.
        index: usize,
        /// Number of cells that differ from the predecessor.
        changed: usize,
    },
    /// A snapshot changes a cell that was already marked.
    #[display("Snapshot {} overwrites cell {}", index, cell)]
    Overwrite {
        /// Index of the offending snapshot.
        index: usize,
        /// Board index of the overwritten cell.
        cell: usize,
    },
    /// A snapshot is marked by the player who was not to move.
    #[display("Snapshot {} was marked by {} but {} was to move", index, found, expected)]
    WrongPlayer {
        /// Index of the offending snapshot.
        index: usize,
        /// Player to move at that point.
        expected: Player,
        /// Player whose mark appeared.
        found: Player,
    },
}
