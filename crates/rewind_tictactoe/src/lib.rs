//! Pure tic-tac-toe game logic with a time-travel move history.
//!
//! The crate has no I/O. A view layer feeds [`Intent`]s into
//! [`GameState::reduce`] and renders the [`GameView`] the state produces.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Intent, Mark, Position, Status};
//!
//! let game = GameState::new()
//!     .reduce(Intent::CellClicked(Position::Center))
//!     .reduce(Intent::CellClicked(Position::TopLeft))
//!     .reduce(Intent::JumpRequested(1));
//!
//! assert_eq!(game.current_status(), Status::NextPlayer(Mark::O));
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod invariants;
mod position;
mod rules;
mod types;
mod view;

pub use action::Intent;
pub use game::{GameState, HistoryEntry, MoveDescription, Status};
pub use invariants::{
    ConsistentHistory, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    NoMovesPastWin, RootIsEmpty, StepInBounds,
};
pub use position::Position;
pub use rules::{LINES, WinResult, WinningLine, detect_win};
pub use types::{Board, Mark, Square};
pub use view::GameView;
