//! First-class intent types for the time-travel game.
//!
//! Intents are what the view layer emits. They carry the user's request and
//! nothing else; legality is decided when the state reduces them.

use serde::{Deserialize, Serialize};

use super::Position;

/// A user request forwarded by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Intent {
    /// A board cell was selected.
    #[display("cell clicked: {}", _0)]
    CellClicked(Position),

    /// A history entry was selected.
    #[display("jump requested: step {}", _0)]
    JumpRequested(usize),

    /// The move list order should flip.
    #[display("toggle direction requested")]
    ToggleDirectionRequested,
}
