//! Terminal UI for the game.

mod app;
mod input;
mod view;

pub use app::{App, Focus};
pub use input::{Command, Direction, command_for, move_cursor};
pub use view::{
    BOARD_HEIGHT, BOARD_WIDTH, BoardView, ClickTarget, GameView, HELP_TEXT, MoveListView,
    MoveView, SQUARE_HEIGHT, SQUARE_WIDTH, ScreenLayout, SquareView, TITLE, TOGGLE_LABEL,
    move_rows, square_rects,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::config::AppConfig;

/// Runs the game in the terminal until the user quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip_all)]
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.reverse_moves());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws a frame, waits for one input event, and applies it.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        let view = app
            .view()
            .context("Move history is inconsistent; cannot render move list")?;

        let mut layout = None;
        terminal.draw(|frame| layout = Some(view.draw(frame)))?;
        if let Some(layout) = layout {
            app.set_layout(layout);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }

    info!("Game loop finished");
    Ok(())
}
