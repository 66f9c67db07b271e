//! Top-level composition: board, status, order toggle, and move list.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tictactoe_history_core::{Board, GameState, LocateError, Status};
use tracing::instrument;

use super::board::BoardView;
use super::layout::ScreenLayout;
use super::moves::{MoveListView, MoveView};
use crate::tui::app::Focus;

/// Title line text.
pub const TITLE: &str = "Tic Tac Toe";

/// Text of the order toggle button.
pub const TOGGLE_LABEL: &str = "toggle location order";

/// Key help shown on the last line.
pub const HELP_TEXT: &str =
    "arrows move · enter select · 1-9 place · tab focus · t order · n new · q quit";

/// Everything needed to draw one frame.
///
/// Building the view locates every move in history, so a corrupted history
/// surfaces here as an error before anything is drawn.
#[derive(Debug, Clone)]
pub struct GameView {
    board: Board,
    status: Status,
    cursor: Option<usize>,
    entries: Vec<MoveView>,
    order: Vec<usize>,
    selected: Option<usize>,
}

impl GameView {
    /// Builds the view of `state`.
    ///
    /// `cursor` is the board cursor and `selected` the list position; each is
    /// shown only while its component has focus.
    ///
    /// # Errors
    ///
    /// Returns a [`LocateError`] if a history entry cannot be located.
    #[instrument(level = "trace", skip(state), fields(step = state.step()))]
    pub fn new(
        state: &GameState,
        cursor: usize,
        selected: usize,
        focus: Focus,
    ) -> Result<Self, LocateError> {
        let order = state.move_order();
        let entries = order
            .iter()
            .map(|&index| {
                let location = state.locate(index)?;
                Ok(MoveView::new(location, index, state.step()))
            })
            .collect::<Result<Vec<_>, LocateError>>()?;

        Ok(Self {
            board: *state.current(),
            status: state.status(),
            cursor: (focus == Focus::Board).then_some(cursor),
            entries,
            order,
            selected: (focus == Focus::Moves).then_some(selected),
        })
    }

    /// Move entries in display order.
    pub fn entries(&self) -> &[MoveView] {
        &self.entries
    }

    /// Status line shown next to the board.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Computes the screen layout for a frame of the given area.
    pub fn layout(&self, area: ratatui::layout::Rect) -> ScreenLayout {
        ScreenLayout::compute(area, &self.order, self.selected.unwrap_or(0))
    }

    /// Draws the frame and returns the layout used, for hit testing.
    pub fn draw(&self, frame: &mut Frame) -> ScreenLayout {
        let layout = self.layout(frame.area());

        let title = Paragraph::new(TITLE)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(title, layout.title);

        frame.render_widget(BoardView::new(&self.board, self.cursor), layout.board);

        let status = Paragraph::new(self.status.to_string()).style(Style::default().fg(Color::Yellow));
        frame.render_widget(status, layout.status);

        let toggle = Paragraph::new(format!("[ {} ]", TOGGLE_LABEL))
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(toggle, layout.toggle);

        frame.render_widget(MoveListView::new(&self.entries, self.selected), layout.moves);

        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, layout.help);

        layout
    }
}
