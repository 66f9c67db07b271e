//! Application state and input handling.
//!
//! [`App`] is the top-level game component: it owns the [`GameState`] and
//! routes key presses and mouse clicks into state transitions.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use strum::IntoEnumIterator;
use tictactoe_history_core::{Action, GameState, LocateError, Outcome};
use tracing::{debug, info, instrument};

use super::input::{Command, Direction, command_for, move_cursor};
use super::view::{ClickTarget, GameView, ScreenLayout};

/// Component receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display, strum::EnumIter)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

impl Focus {
    /// Returns the next focus target, wrapping around.
    pub fn next(self) -> Self {
        Focus::iter()
            .cycle()
            .skip_while(|focus| *focus != self)
            .nth(1)
            .unwrap_or_default()
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    state: GameState,
    cursor: usize,
    focus: Focus,
    selected: usize,
    layout: Option<ScreenLayout>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(is_reverse: bool) -> Self {
        Self {
            state: GameState::with_order(is_reverse),
            cursor: 4,
            focus: Focus::Board,
            selected: 0,
            layout: None,
            should_quit: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_state(state: GameState) -> Self {
        Self {
            state,
            ..Self::new(false)
        }
    }

    /// Gets the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Board index under the keyboard cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Component receiving keyboard input.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected position in the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Checks if the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Builds the view for the next frame.
    ///
    /// # Errors
    ///
    /// Returns a [`LocateError`] if the move history is corrupted.
    pub fn view(&self) -> Result<GameView, LocateError> {
        GameView::new(&self.state, self.cursor, self.selected, self.focus)
    }

    /// Records the layout of the last drawn frame for hit testing.
    pub fn set_layout(&mut self, layout: ScreenLayout) {
        self.layout = Some(layout);
    }

    /// Applies a game action.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = self.state.dispatch(action);
        if outcome.is_applied() {
            self.sync_selection();
            debug!(step = self.state.step(), status = %self.state.status(), "State updated");
        }
        outcome
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(command) = command_for(key) else {
            return;
        };

        match command {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Command::SwitchFocus => {
                self.focus = self.focus.next();
                self.sync_selection();
                debug!(focus = %self.focus, "Focus switched");
            }
            Command::ToggleOrder => {
                self.dispatch(Action::ToggleOrder);
            }
            Command::Restart => {
                info!("Restarting game");
                self.dispatch(Action::Restart);
            }
            Command::PlaceAt(index) => {
                self.focus = Focus::Board;
                self.cursor = index;
                self.dispatch(Action::PlaceMark(index));
            }
            Command::Activate => match self.focus {
                Focus::Board => {
                    self.dispatch(Action::PlaceMark(self.cursor));
                }
                Focus::Moves => {
                    if let Some(&step) = self.state.move_order().get(self.selected) {
                        self.dispatch(Action::JumpTo(step));
                    }
                }
            },
            Command::Navigate(direction) => self.navigate(direction),
        }
    }

    /// Handles a mouse event; only left-button presses act.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let target = self
            .layout
            .as_ref()
            .and_then(|layout| layout.hit(event.column, event.row));
        if let Some(target) = target {
            self.click(target);
        }
    }

    /// Handles a click on a component.
    #[instrument(skip(self))]
    pub fn click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Square(index) => {
                self.focus = Focus::Board;
                self.cursor = index;
            }
            ClickTarget::Move(_) => self.focus = Focus::Moves,
            ClickTarget::ToggleOrder => {}
        }
        self.dispatch(target.action());
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::Moves => {
                let last = self.state.history().len() - 1;
                self.selected = match direction {
                    Direction::Up => self.selected.saturating_sub(1),
                    Direction::Down => (self.selected + 1).min(last),
                    Direction::Left | Direction::Right => self.selected,
                };
            }
        }
    }

    /// Points the list selection at the displayed step.
    fn sync_selection(&mut self) {
        let step = self.state.step();
        self.selected = self
            .state
            .move_order()
            .iter()
            .position(|&index| index == step)
            .unwrap_or(0);
    }
}
