//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use crate::types::{Board, Cell, Player};

/// Indices of a winning triple.
pub type WinningLine = [usize; 3];

/// All winning triples in priority order.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Result of evaluating a board.
///
/// `winner` and `line` are either both set or both empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// The player owning the winning line.
    pub winner: Option<Player>,
    /// The first completed line in priority order.
    pub line: Option<WinningLine>,
}

impl Evaluation {
    /// Checks if `index` is part of the winning line.
    pub fn highlights(&self, index: usize) -> bool {
        self.line.is_some_and(|line| line.contains(&index))
    }
}

/// Evaluates a board for a winner.
///
/// Lines are checked rows first, then columns, then diagonals; the first
/// line with three identical marks decides the result.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Evaluation {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let cell = board.get(a);
        if let Some(Cell::Marked(player)) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Evaluation {
                winner: Some(player),
                line: Some(line),
            };
        }
    }

    Evaluation::default()
}
