//! The 3x3 grid of squares.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use tictactoe_history_core::{BOARD_CELLS, BOARD_SIZE, Board, evaluate};

use super::square::{SQUARE_HEIGHT, SQUARE_WIDTH, SquareView};

/// Width of the whole board.
pub const BOARD_WIDTH: u16 = SQUARE_WIDTH * BOARD_SIZE as u16;

/// Height of the whole board.
pub const BOARD_HEIGHT: u16 = SQUARE_HEIGHT * BOARD_SIZE as u16;

/// Rectangles of the nine squares of a board drawn at the top-left of `area`.
///
/// Squares that do not fit are clipped to `area`.
pub fn square_rects(area: Rect) -> [Rect; BOARD_CELLS] {
    std::array::from_fn(|index| {
        let col = (index % BOARD_SIZE) as u16;
        let row = (index / BOARD_SIZE) as u16;
        Rect::new(
            area.x.saturating_add(col * SQUARE_WIDTH),
            area.y.saturating_add(row * SQUARE_HEIGHT),
            SQUARE_WIDTH,
            SQUARE_HEIGHT,
        )
        .intersection(area)
    })
}

/// Renders a board snapshot, highlighting the winning line.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    squares: &'a Board,
    cursor: Option<usize>,
}

impl<'a> BoardView<'a> {
    /// Creates a board view. `cursor` is the keyboard cursor, if the board has focus.
    pub fn new(squares: &'a Board, cursor: Option<usize>) -> Self {
        Self { squares, cursor }
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let evaluation = evaluate(self.squares);
        for (index, rect) in square_rects(area).into_iter().enumerate() {
            let square = SquareView {
                value: self.squares.get(index).unwrap_or_default(),
                is_highlight: evaluation.highlights(index),
                is_cursor: self.cursor == Some(index),
            };
            square.render(rect, buf);
        }
    }
}
