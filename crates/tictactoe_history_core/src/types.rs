//! Core domain types for tic-tac-toe.

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Width (and height) of the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player to move after `step` moves have been made.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Marked(Player),
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns a copy of this board with `index` marked by `player`.
    ///
    /// Snapshots are never mutated in place; a move always produces a new one.
    pub fn with_mark(&self, index: usize, player: Player) -> Option<Self> {
        if index >= BOARD_CELLS {
            return None;
        }
        let mut next = *self;
        next.cells[index] = Cell::Marked(player);
        Some(next)
    }

    /// Checks if the cell at `index` is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let index = row * BOARD_SIZE + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => ".".to_string(),
                    Cell::Marked(player) => player.to_string(),
                };
                result.push_str(&symbol);
            }
            if row < BOARD_SIZE - 1 {
                result.push('\n');
            }
        }
        result
    }

    /// Parses a board from nine characters (`X`, `O`, anything else is empty).
    ///
    /// Whitespace is skipped. Returns `None` if there are not exactly nine cells.
    pub fn parse(text: &str) -> Option<Self> {
        let cells: Vec<Cell> = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' | 'x' => Cell::Marked(Player::X),
                'O' | 'o' => Cell::Marked(Player::O),
                _ => Cell::Empty,
            })
            .collect();
        let cells: [Cell; BOARD_CELLS] = cells.try_into().ok()?;
        Some(Self { cells })
    }
}

/// Row (0-based) of a board index.
pub fn row_of(index: usize) -> usize {
    index / BOARD_SIZE
}

/// Column (0-based) of a board index.
pub fn col_of(index: usize) -> usize {
    index % BOARD_SIZE
}
