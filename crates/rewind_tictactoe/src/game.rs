//! Game state with a time-travel move history.
//!
//! Every transition consumes the state and returns the next one. Whose turn
//! it is and whether the game is won are derived from the history on read,
//! so there is no stored status that could drift out of step with the board.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::action::Intent;
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{WinResult, WinningLine, detect_win};
use super::{Board, Mark, Position};

/// A board snapshot plus the cell played to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    pub(crate) board: Board,
    /// Cell played to reach this board; `None` for the initial entry.
    pub(crate) last_moved: Option<Position>,
}

impl HistoryEntry {
    /// The empty-board entry every history starts with.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_moved: None,
        }
    }
}

/// What the status line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The current board has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// The game continues with this mark to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct MoveDescription {
    /// History position this row jumps to.
    step: usize,
    /// Button text.
    label: String,
    /// Whether this is the most recently jumped-to step.
    highlighted: bool,
}

/// Tic-tac-toe game with a branching-free, rewindable history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_step: usize,
    pub(crate) list_ascending: bool,
    pub(crate) last_jump: Option<usize>,
}

impl GameState {
    /// Creates a game holding only the empty-board entry.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            current_step: 0,
            list_ascending: true,
            last_jump: None,
        }
    }

    /// Sets the initial move list order.
    pub fn with_list_ascending(mut self, ascending: bool) -> Self {
        self.list_ascending = ascending;
        self
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Places the next mark at `pos`.
    ///
    /// Moves on an occupied square or on an already-won board are ignored
    /// and the state is returned unchanged. Otherwise every entry after the
    /// current step is discarded before the new board is appended, so a
    /// move made after a jump drops the old continuation.
    #[instrument(skip(self), fields(step = self.current_step, mark = %self.next_mark()))]
    pub fn apply_move(mut self, pos: Position) -> Self {
        let board = *self.current_board();

        if let WinResult::Winner(line) = detect_win(&board) {
            debug!(winner = %line.mark(), "Ignoring move on a won board");
            return self;
        }

        if !board.is_empty(pos) {
            debug!(position = %pos, "Ignoring move on an occupied square");
            return self;
        }

        let mark = self.next_mark();
        let discarded = self.history.len() - (self.current_step + 1);
        self.history.truncate(self.current_step + 1);
        self.history.push(HistoryEntry {
            board: board.with_mark(pos, mark),
            last_moved: Some(pos),
        });
        self.current_step = self.history.len() - 1;
        self.last_jump = None;

        debug!(
            position = %pos,
            discarded,
            new_step = self.current_step,
            "Move applied"
        );
        self.assert_invariants();
        self
    }

    /// Rewinds (or fast-forwards) to a recorded step.
    ///
    /// History is left intact; only the current step and the highlight move.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not an index into the history. Jump targets are
    /// expected to come from [`GameState::move_descriptions`].
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(mut self, step: usize) -> Self {
        assert!(
            step < self.history.len(),
            "jump to step {step} outside history of {} entries",
            self.history.len()
        );

        self.current_step = step;
        self.last_jump = Some(step);

        debug!(to = step, next = %self.next_mark(), "Jumped");
        self.assert_invariants();
        self
    }

    /// Flips the move list between ascending and descending order.
    #[instrument(skip(self), fields(ascending = self.list_ascending))]
    pub fn toggle_list_direction(mut self) -> Self {
        self.list_ascending = !self.list_ascending;
        self
    }

    /// Dispatches a view-layer intent to the matching transition.
    #[instrument(skip(self, intent), fields(%intent))]
    pub fn reduce(self, intent: Intent) -> Self {
        match intent {
            Intent::CellClicked(pos) => self.apply_move(pos),
            Intent::JumpRequested(step) => self.jump_to(step),
            Intent::ToggleDirectionRequested => self.toggle_list_direction(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Reads
    // ─────────────────────────────────────────────────────────────

    /// All recorded entries; index 0 is the empty board.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the entry currently shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step].board
    }

    /// Mark to move, derived from the current step's parity.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    /// Whether the move list is shown oldest first.
    pub fn list_ascending(&self) -> bool {
        self.list_ascending
    }

    /// Most recently jumped-to step, cleared by the next move.
    pub fn last_jump(&self) -> Option<usize> {
        self.last_jump
    }

    /// Completed line on the current board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        detect_win(self.current_board()).line()
    }

    /// Winner or next player for the current board.
    pub fn current_status(&self) -> Status {
        match self.winning_line() {
            Some(line) => Status::Winner(*line.mark()),
            None => Status::NextPlayer(self.next_mark()),
        }
    }

    /// Move list rows in display order.
    ///
    /// Descending order only reverses the rows; each row keeps its true
    /// history step for both its label and its jump target.
    pub fn move_descriptions(&self) -> Vec<MoveDescription> {
        let mut moves: Vec<_> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| {
                MoveDescription::new(
                    step,
                    describe(step, entry),
                    self.last_jump == Some(step),
                )
            })
            .collect();

        if !self.list_ascending {
            moves.reverse();
        }
        moves
    }

    fn assert_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(self)
        {
            panic!("game state invariants violated: {violations:?}");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Label for the row at `step`.
///
/// The first number is `cell / 3 + 1` and the second `cell % 3 + 1`, shown
/// as "(col, row)". That reads transposed against the board's geometric
/// rows; the text is kept as players have always seen it.
fn describe(step: usize, entry: &HistoryEntry) -> String {
    match (step, entry.last_moved) {
        (0, _) | (_, None) => "Go to game start".to_string(),
        (step, Some(pos)) => {
            let cell = pos.to_index();
            let col = cell / 3 + 1;
            let row = cell % 3 + 1;
            format!("Go to move #{step} ({col}, {row})")
        }
    }
}
