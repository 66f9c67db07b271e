//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are checked in debug builds and can be tested independently.

use crate::state::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, returning the descriptions of those that fail.
    fn check_all(state: &S) -> Result<(), Vec<&'static str>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<&'static str>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(I1::description());
        }

        if !I2::holds(state) {
            violations.push(I2::description());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: every snapshot marks exactly one new cell for the player to move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().verify().is_ok()
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player to move"
    }
}

/// Invariant: the current step points into history.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.step() < state.history().len()
    }

    fn description() -> &'static str {
        "Current step is within history"
    }
}

/// All game-state invariants as a composable set.
pub type GameInvariants = (HistoryConsistentInvariant, StepInRangeInvariant);

/// Panics in debug builds if any invariant is violated.
pub(crate) fn assert_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameInvariants::check_all(state)
    {
        panic!("Game state invariants violated: {}", violations.join("; "));
    }
}
