//! Game state and its transitions.
//!
//! Transitions are pure: [`GameState::apply`] takes the current state and an
//! [`Action`] and returns the next state together with an [`Outcome`]. An
//! action that cannot be applied is not an error; it comes back as
//! [`Outcome::Ignored`] with the state unchanged.

use tracing::{debug, info, instrument};

use crate::error::LocateError;
use crate::history::History;
use crate::invariants::assert_invariants;
use crate::locate::Location;
use crate::rules::{Evaluation, Status, evaluate, status};
use crate::types::{BOARD_CELLS, Board, Player};

/// User intent routed from the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Mark the cell at a board index for the player to move.
    PlaceMark(usize),
    /// Display the snapshot at a history step.
    JumpTo(usize),
    /// Reverse the display order of the move list.
    ToggleOrder,
    /// Discard everything and start over.
    Restart,
}

/// Why an action was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// Board index is not 0-8.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(usize),
    /// The cell is already marked at the current step.
    #[display("Cell {} is already marked", _0)]
    Occupied(usize),
    /// A winner exists at the current step.
    #[display("Game already won by {}", _0)]
    GameOver(Player),
    /// The step is past the end of history.
    #[display("Step {} is outside a history of {} snapshots", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of snapshots in history.
        len: usize,
    },
}

/// What a transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action changed the state.
    Applied,
    /// The action was a no-op.
    Ignored(Rejection),
}

impl Outcome {
    /// Returns true if the action changed the state.
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Next state produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the action.
    pub state: GameState,
    /// Whether the action was applied.
    pub outcome: Outcome,
}

/// Complete game state.
///
/// The player to move is not stored; it follows from the parity of `step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: History,
    step: usize,
    is_reverse: bool,
}

impl GameState {
    /// Creates a new game: one empty snapshot, step 0, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step: 0,
            is_reverse: false,
        }
    }

    /// Creates a new game with the given move-list order.
    pub fn with_order(is_reverse: bool) -> Self {
        Self {
            is_reverse,
            ..Self::new()
        }
    }

    /// Builds a state over an unverified history.
    ///
    /// `step` must index into `history`.
    #[cfg(any(test, feature = "testing"))]
    pub fn from_history_unchecked(history: History, step: usize) -> Self {
        Self {
            history,
            step,
            is_reverse: false,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the displayed history step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns true if the move list is shown newest first.
    pub fn is_reverse(&self) -> bool {
        self.is_reverse
    }

    /// Returns true if X moves next at the displayed step.
    pub fn x_is_next(&self) -> bool {
        self.step % 2 == 0
    }

    /// Returns the player to move at the displayed step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Returns the board at the displayed step.
    pub fn current(&self) -> &Board {
        // step < history.len() holds after every transition
        &self.history.snapshots()[self.step]
    }

    /// Evaluates the displayed board for a winner.
    pub fn evaluation(&self) -> Evaluation {
        evaluate(self.current())
    }

    /// Returns the status line for the displayed step.
    pub fn status(&self) -> Status {
        status(self.current(), self.step)
    }

    /// Locates the move recorded at `move_index`.
    ///
    /// # Errors
    ///
    /// Returns a [`LocateError`] if history is corrupted.
    pub fn locate(&self, move_index: usize) -> Result<Location, LocateError> {
        self.history.locate(move_index)
    }

    /// History indices in the order the move list displays them.
    pub fn move_order(&self) -> Vec<usize> {
        let indices = 0..self.history.len();
        if self.is_reverse {
            indices.rev().collect()
        } else {
            indices.collect()
        }
    }

    /// Applies an action, returning the next state.
    #[instrument(skip(self), fields(step = self.step, len = self.history.len()))]
    pub fn apply(&self, action: Action) -> Transition {
        let result = match action {
            Action::PlaceMark(index) => self.place_mark(index),
            Action::JumpTo(step) => self.jump_to(step),
            Action::ToggleOrder => Ok(Self {
                is_reverse: !self.is_reverse,
                ..self.clone()
            }),
            Action::Restart => Ok(Self::with_order(self.is_reverse)),
        };

        match result {
            Ok(state) => {
                assert_invariants(&state);
                Transition {
                    state,
                    outcome: Outcome::Applied,
                }
            }
            Err(rejection) => {
                debug!(%rejection, "Action ignored");
                Transition {
                    state: self.clone(),
                    outcome: Outcome::Ignored(rejection),
                }
            }
        }
    }

    /// Applies an action in place and reports the outcome.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let Transition { state, outcome } = self.apply(action);
        *self = state;
        outcome
    }

    fn place_mark(&self, index: usize) -> Result<Self, Rejection> {
        if index >= BOARD_CELLS {
            return Err(Rejection::OutOfBounds(index));
        }
        let current = self.current();
        if let Some(winner) = evaluate(current).winner {
            return Err(Rejection::GameOver(winner));
        }
        if !current.is_empty(index) {
            return Err(Rejection::Occupied(index));
        }

        let player = self.next_player();
        let next = current
            .with_mark(index, player)
            .ok_or(Rejection::OutOfBounds(index))?;
        let history = self.history.branch(self.step, next);
        let step = history.last_step();

        info!(index, %player, step, "Mark placed");
        debug!(board = %next.display(), "Board after move");
        Ok(Self {
            history,
            step,
            is_reverse: self.is_reverse,
        })
    }

    fn jump_to(&self, step: usize) -> Result<Self, Rejection> {
        if step >= self.history.len() {
            return Err(Rejection::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        debug!(from = self.step, to = step, "Jumping to step");
        Ok(Self {
            step,
            ..self.clone()
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn play(moves: &[usize]) -> GameState {
        let mut state = GameState::new();
        for &index in moves {
            assert_eq!(state.dispatch(Action::PlaceMark(index)), Outcome::Applied);
        }
        state
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.step(), 0);
        assert!(state.x_is_next());
        assert!(!state.is_reverse());
        assert_eq!(state.status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_place_mark_appends_one_snapshot() {
        let before = play(&[4]);
        let transition = before.apply(Action::PlaceMark(0));
        assert_eq!(transition.outcome, Outcome::Applied);

        let after = transition.state;
        assert_eq!(after.history().len(), before.history().len() + 1);
        assert_eq!(after.step(), before.step() + 1);
        assert_ne!(after.x_is_next(), before.x_is_next());

        let previous = before.current();
        let current = after.current();
        for index in 0..BOARD_CELLS {
            if index == 0 {
                assert_eq!(current.get(index), Some(Cell::Marked(before.next_player())));
            } else {
                assert_eq!(current.get(index), previous.get(index));
            }
        }
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let before = play(&[4]);
        let transition = before.apply(Action::PlaceMark(4));
        assert_eq!(transition.outcome, Outcome::Ignored(Rejection::Occupied(4)));
        assert_eq!(transition.state, before);
    }

    #[test]
    fn test_finished_game_is_ignored() {
        let before = play(&[0, 3, 1, 4, 2]);
        assert_eq!(before.status(), Status::Winner(Player::X));
        let transition = before.apply(Action::PlaceMark(8));
        assert_eq!(
            transition.outcome,
            Outcome::Ignored(Rejection::GameOver(Player::X))
        );
        assert_eq!(transition.state, before);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let before = GameState::new();
        let transition = before.apply(Action::PlaceMark(9));
        assert_eq!(transition.outcome, Outcome::Ignored(Rejection::OutOfBounds(9)));
        assert_eq!(transition.state, before);
    }

    #[test]
    fn test_jump_keeps_history() {
        let before = play(&[0, 4, 8]);
        for step in 0..before.history().len() {
            let after = before.apply(Action::JumpTo(step)).state;
            assert_eq!(after.step(), step);
            assert_eq!(after.x_is_next(), step % 2 == 0);
            assert_eq!(after.history(), before.history());
        }
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let before = play(&[0]);
        let transition = before.apply(Action::JumpTo(5));
        assert_eq!(
            transition.outcome,
            Outcome::Ignored(Rejection::StepOutOfRange { step: 5, len: 2 })
        );
        assert_eq!(transition.state, before);
    }

    #[test]
    fn test_move_after_jump_truncates() {
        let mut state = play(&[0, 4, 8, 2]);
        state.dispatch(Action::JumpTo(1));
        assert_eq!(state.next_player(), Player::O);
        state.dispatch(Action::PlaceMark(6));

        assert_eq!(state.history().len(), 3);
        assert_eq!(state.step(), 2);
        assert_eq!(state.current().get(6), Some(Cell::Marked(Player::O)));
        assert!(state.current().is_empty(4));
    }

    #[test]
    fn test_jump_forward_after_jump_back() {
        let mut state = play(&[0, 4, 8]);
        state.dispatch(Action::JumpTo(0));
        state.dispatch(Action::JumpTo(3));
        assert_eq!(state.step(), 3);
        assert_eq!(state.history().len(), 4);
    }

    #[test]
    fn test_toggle_order_only_changes_order() {
        let before = play(&[0, 4]);
        let after = before.apply(Action::ToggleOrder).state;
        assert!(after.is_reverse());
        assert_eq!(after.history(), before.history());
        assert_eq!(after.step(), before.step());
        assert_eq!(after.x_is_next(), before.x_is_next());
        assert_eq!(before.move_order(), vec![0, 1, 2]);
        assert_eq!(after.move_order(), vec![2, 1, 0]);
    }

    #[test]
    fn test_restart_keeps_order_preference() {
        let mut state = play(&[0, 4]);
        state.dispatch(Action::ToggleOrder);
        state.dispatch(Action::Restart);
        assert_eq!(state, GameState::with_order(true));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::Occupied(3).to_string(), "Cell 3 is already marked");
        assert_eq!(
            Rejection::GameOver(Player::O).to_string(),
            "Game already won by O"
        );
    }
}
