//! Stateless UI rendering for the game.
//!
//! Components mirror the widget tree: [`SquareView`] inside [`BoardView`],
//! [`MoveView`] entries inside [`MoveListView`], all composed by
//! [`GameView`]. Rectangles come from [`ScreenLayout`], which is also used
//! to map mouse clicks back onto components.

mod board;
mod game;
mod layout;
mod moves;
mod square;

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, BoardView, square_rects};
pub use game::{GameView, HELP_TEXT, TITLE, TOGGLE_LABEL};
pub use layout::{ClickTarget, ScreenLayout};
pub use moves::{MoveListView, MoveView, move_rows};
pub use square::{SQUARE_HEIGHT, SQUARE_WIDTH, SquareView};

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Centers a `width` x `height` rectangle inside `area`, clipping if needed.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

/// Checks if the terminal cell at `(column, row)` lies inside `area`.
pub(crate) fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
