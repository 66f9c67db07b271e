//! A single board cell.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tictactoe_history_core::{Cell, Player};

/// Width of one square, borders included.
pub const SQUARE_WIDTH: u16 = 7;

/// Height of one square, borders included.
pub const SQUARE_HEIGHT: u16 = 3;

/// One clickable cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareView {
    /// Mark shown in the cell.
    pub value: Cell,
    /// Part of the winning line; drawn on a yellow background.
    pub is_highlight: bool,
    /// Under the keyboard cursor; drawn reversed.
    pub is_cursor: bool,
}

impl SquareView {
    /// Style for the cell contents.
    pub fn style(&self) -> Style {
        let mut style = match self.value {
            Cell::Empty => Style::default().fg(Color::DarkGray),
            Cell::Marked(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            Cell::Marked(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };
        if self.is_highlight {
            style = style.bg(Color::Yellow);
        }
        if self.is_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

impl Widget for SquareView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let symbol = match self.value {
            Cell::Empty => " ".to_string(),
            Cell::Marked(player) => player.to_string(),
        };

        Paragraph::new(symbol)
            .style(self.style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
