//! Invariants on the current step and on play after a win.

use super::super::{GameState, detect_win};
use super::Invariant;

/// Invariant: the current step indexes an existing entry.
pub struct StepInBounds;

impl Invariant<GameState> for StepInBounds {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step indexes an existing history entry"
    }
}

/// Invariant: a won board is always the last entry.
///
/// Moves on a won board are refused, and a move from an earlier step
/// truncates the won board away, so no entry ever follows a win.
pub struct NoMovesPastWin;

impl Invariant<GameState> for NoMovesPastWin {
    fn holds(game: &GameState) -> bool {
        let Some((_, earlier)) = game.history().split_last() else {
            return true;
        };
        earlier
            .iter()
            .all(|entry| !detect_win(entry.board()).is_winner())
    }

    fn description() -> &'static str {
        "No history entry follows a won board"
    }
}
