//! Game rules for tic-tac-toe.
//!
//! Rules are pure functions over a [`Board`](super::Board), kept apart from
//! history management so they can be tested on arbitrary boards.

pub mod win;

pub use win::{LINES, WinResult, WinningLine, detect_win};
