//! Terminal tic-tac-toe with move history and time travel.
//!
//! This library wires the pure game logic from `tictactoe_history_core`
//! into a ratatui front end.
//!
//! # Architecture
//!
//! - **Core**: win detection, move location, and state transitions
//!   (re-exported from `tictactoe_history_core`)
//! - **View**: square, board, move list, and game components
//! - **App**: owns the game state and turns clicks and keys into actions
//! - **Config**: TOML file plus command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod logging;
mod tui;

// Crate-level exports - Command line and configuration
pub use cli::Cli;
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use logging::init as init_logging;

// Crate-level exports - Terminal UI
pub use tui::{
    App, BOARD_HEIGHT, BOARD_WIDTH, BoardView, ClickTarget, Command, Direction, Focus, GameView,
    HELP_TEXT, MoveListView, MoveView, SQUARE_HEIGHT, SQUARE_WIDTH, ScreenLayout, SquareView,
    TITLE, TOGGLE_LABEL, command_for, move_cursor, move_rows, run, square_rects,
};

// Crate-level exports - Game logic
pub use tictactoe_history_core::{
    Action, Board, Cell, Evaluation, GameState, History, HistoryError, LocateError, Location,
    Outcome, Player, Rejection, Status, Transition, evaluate, locate,
};
