//! Screen geometry and mouse hit testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tictactoe_history_core::{Action, BOARD_CELLS};

use super::board::{BOARD_HEIGHT, BOARD_WIDTH, square_rects};
use super::moves::move_rows;
use super::{center_rect, contains};

/// Width of the toggle button, brackets included.
const TOGGLE_WIDTH: u16 = super::game::TOGGLE_LABEL.len() as u16 + 4;

/// A clickable component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A board square, by board index.
    Square(usize),
    /// A move list entry, by history index.
    Move(usize),
    /// The order toggle button.
    ToggleOrder,
}

impl ClickTarget {
    /// The game action this click stands for.
    pub fn action(self) -> Action {
        match self {
            ClickTarget::Square(index) => Action::PlaceMark(index),
            ClickTarget::Move(step) => Action::JumpTo(step),
            ClickTarget::ToggleOrder => Action::ToggleOrder,
        }
    }
}

/// Rectangles of every component for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// The board as a whole.
    pub board: Rect,
    /// Each square, by board index.
    pub squares: [Rect; BOARD_CELLS],
    /// Status line.
    pub status: Rect,
    /// Order toggle button.
    pub toggle: Rect,
    /// The bordered move list.
    pub moves: Rect,
    /// Visible list rows as `(history index, rect)`.
    pub move_rows: Vec<(usize, Rect)>,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Lays out the screen for `area`.
    ///
    /// `order` lists history indices in display order and `selected` is the
    /// position in that order that must stay visible.
    pub fn compute(area: Rect, order: &[usize], selected: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(0)])
            .split(rows[1]);

        let board = center_rect(body[0], BOARD_WIDTH, BOARD_HEIGHT);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status
                Constraint::Length(1), // Toggle
                Constraint::Length(1),
                Constraint::Min(0), // Moves
            ])
            .split(body[1]);

        let toggle = Rect {
            width: TOGGLE_WIDTH.min(info[1].width),
            ..info[1]
        };

        let move_rows = move_rows(info[3], order.len(), selected)
            .into_iter()
            .map(|(position, rect)| (order[position], rect))
            .collect();

        Self {
            title: rows[0],
            board,
            squares: square_rects(board),
            status: info[0],
            toggle,
            moves: info[3],
            move_rows,
            help: rows[2],
        }
    }

    /// Finds the component under a terminal cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<ClickTarget> {
        if let Some(index) = self
            .squares
            .iter()
            .position(|&rect| contains(rect, column, row))
        {
            return Some(ClickTarget::Square(index));
        }
        if contains(self.toggle, column, row) {
            return Some(ClickTarget::ToggleOrder);
        }
        self.move_rows
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|&(step, _)| ClickTarget::Move(step))
    }
}
