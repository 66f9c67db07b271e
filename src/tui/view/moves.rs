//! The move list: one entry per history snapshot.

use derive_new::new;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tictactoe_history_core::Location;

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct MoveView {
    /// Where the move was played.
    location: Location,
    /// History index this entry jumps to.
    history_index: usize,
    /// Step currently displayed.
    step_number: usize,
}

impl MoveView {
    /// History index this entry jumps to.
    pub fn history_index(&self) -> usize {
        self.history_index
    }

    /// Button text for the entry.
    pub fn label(&self) -> String {
        if self.history_index == 0 {
            return "Go to game start".to_string();
        }
        let player = self
            .location
            .player
            .map(|player| player.to_string())
            .unwrap_or_default();
        format!(
            "Go to move #{} - player:{}, row:{}, col:{}",
            self.history_index, player, self.location.row, self.location.col
        )
    }

    /// Checks if this entry is the displayed step.
    pub fn is_current(&self) -> bool {
        self.history_index == self.step_number
    }

    /// Renders the entry as a numbered line. `position` is its 0-based place in the list.
    pub fn line(&self, position: usize, is_selected: bool) -> Line<'static> {
        let mut style = Style::default();
        if self.is_current() {
            style = style.add_modifier(Modifier::BOLD);
        }
        if is_selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Line::from(vec![
            Span::styled(format!("{:>2}. ", position + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(self.label(), style),
        ])
    }
}

/// Rows of the list entries visible inside a bordered list `area`.
///
/// Returns `(position, rect)` pairs. The window scrolls so that `selected`
/// stays visible.
pub fn move_rows(area: Rect, count: usize, selected: usize) -> Vec<(usize, Rect)> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let height = inner.height as usize;
    if height == 0 || inner.width == 0 {
        return Vec::new();
    }

    let first = selected.min(count.saturating_sub(1)).saturating_sub(height - 1);
    (first..count)
        .take(height)
        .enumerate()
        .map(|(offset, position)| {
            let rect = Rect::new(inner.x, inner.y + offset as u16, inner.width, 1);
            (position, rect)
        })
        .collect()
}

/// The bordered, ordered list of moves.
#[derive(Debug, Clone, Copy)]
pub struct MoveListView<'a> {
    entries: &'a [MoveView],
    selected: Option<usize>,
}

impl<'a> MoveListView<'a> {
    /// Creates a list view. `entries` are in display order; `selected` is a
    /// position in that order, set when the list has focus.
    pub fn new(entries: &'a [MoveView], selected: Option<usize>) -> Self {
        Self { entries, selected }
    }
}

impl Widget for MoveListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected.is_some() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::default()
            .title("Moves")
            .borders(Borders::ALL)
            .border_style(border_style)
            .render(area, buf);

        let rows = move_rows(area, self.entries.len(), self.selected.unwrap_or(0));
        for (position, rect) in rows {
            let entry = &self.entries[position];
            let line = entry.line(position, self.selected == Some(position));
            Paragraph::new(line).render(rect, buf);
        }
    }
}
