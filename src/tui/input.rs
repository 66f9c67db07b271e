//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use tictactoe_history_core::{BOARD_CELLS, BOARD_SIZE, col_of, row_of};

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the top row / earlier list entry.
    Up,
    /// Towards the bottom row / later list entry.
    Down,
    /// Towards the left column.
    Left,
    /// Towards the right column.
    Right,
}

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the game.
    Quit,
    /// Move focus between the board and the move list.
    SwitchFocus,
    /// Reverse the move list order.
    ToggleOrder,
    /// Start a new game.
    Restart,
    /// Press the focused element: place on the board or jump in the list.
    Activate,
    /// Place a mark directly on a board index.
    PlaceAt(usize),
    /// Move the board cursor or the list selection.
    Navigate(Direction),
}

/// Maps a key to a command. Unbound keys yield `None`.
pub fn command_for(key: KeyCode) -> Option<Command> {
    let command = match key {
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Tab | KeyCode::BackTab => Command::SwitchFocus,
        KeyCode::Char('t') => Command::ToggleOrder,
        KeyCode::Char('n') => Command::Restart,
        KeyCode::Enter | KeyCode::Char(' ') => Command::Activate,
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10)? as usize;
            Command::PlaceAt(digit - 1)
        }
        KeyCode::Up => Command::Navigate(Direction::Up),
        KeyCode::Down => Command::Navigate(Direction::Down),
        KeyCode::Left => Command::Navigate(Direction::Left),
        KeyCode::Right => Command::Navigate(Direction::Right),
        _ => return None,
    };
    Some(command)
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: usize, direction: Direction) -> usize {
    let cursor = cursor.min(BOARD_CELLS - 1);
    let (row, col) = (row_of(cursor), col_of(cursor));
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(BOARD_SIZE - 1), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(BOARD_SIZE - 1)),
    };
    row * BOARD_SIZE + col
}
