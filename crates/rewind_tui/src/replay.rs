//! Headless play-through for scripts and tests.

use rewind_tictactoe::{GameState, GameView, Intent, Position};
use std::fmt::Write;
use tracing::{info, instrument, warn};

/// Error that can occur while replaying.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ReplayError {
    /// The requested jump target is not a recorded step.
    #[display("Cannot jump to step {step}: history has {len} entries")]
    JumpOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },

    /// A cell index outside 0-8.
    #[display("Cell {_0} is not on the board (expected 0-8)")]
    CellOutOfRange(#[error(not(source))] u8),
}

/// Clicks `cells` in order, then optionally jumps and reverses the list.
///
/// Clicks on occupied cells or after a win are ignored exactly as in the
/// interactive game.
#[instrument]
pub fn replay(cells: &[u8], jump: Option<usize>, descending: bool) -> Result<GameView, ReplayError> {
    let mut game = GameState::new().with_list_ascending(!descending);

    for &cell in cells {
        let pos = Position::from_index(usize::from(cell)).ok_or(ReplayError::CellOutOfRange(cell))?;
        let before = game.current_step();
        game = game.reduce(Intent::CellClicked(pos));
        if game.current_step() == before {
            warn!(cell, "Click ignored");
        }
    }

    if let Some(step) = jump {
        let len = game.history().len();
        if step >= len {
            return Err(ReplayError::JumpOutOfRange { step, len });
        }
        game = game.reduce(Intent::JumpRequested(step));
    }

    info!(step = game.current_step(), status = %game.current_status(), "Replay finished");
    Ok(game.view())
}

/// Formats a view as plain text: board, status, then the move list.
///
/// The highlighted row is marked with `*` and the shown step with `>`.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.board());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", view.status());
    if let Some(line) = view.winning_line() {
        let [a, b, c] = line.indices();
        let _ = writeln!(out, "Winning line: {a}, {b}, {c}");
    }
    let _ = writeln!(out);
    for m in view.moves() {
        let current = if *m.step() == *view.current_step() { '>' } else { ' ' };
        let highlight = if *m.highlighted() { '*' } else { ' ' };
        let _ = writeln!(out, "{current}{highlight} {}", m.label());
    }
    out
}
