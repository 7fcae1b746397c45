//! Render data handed to the view layer.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{Board, GameState, MoveDescription, Status, WinningLine};

/// Immutable snapshot of everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the current step.
    board: Board,
    /// Winner or next player.
    status: Status,
    /// Move list rows in display order.
    moves: Vec<MoveDescription>,
    /// Cells to emphasise; `None` while nobody has won.
    winning_line: Option<WinningLine>,
    /// Step the board is showing.
    current_step: usize,
    /// Whether `moves` runs oldest first.
    list_ascending: bool,
}

impl From<&GameState> for GameView {
    #[instrument(skip(game), fields(step = game.current_step()))]
    fn from(game: &GameState) -> Self {
        Self {
            board: *game.current_board(),
            status: game.current_status(),
            moves: game.move_descriptions(),
            winning_line: game.winning_line(),
            current_step: game.current_step(),
            list_ascending: game.list_ascending(),
        }
    }
}

impl GameState {
    /// Builds the render data for the current state.
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }
}
