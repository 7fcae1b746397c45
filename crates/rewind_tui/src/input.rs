//! Keyboard mapping for the terminal front end.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;
use tracing::instrument;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    History,
}

impl Panel {
    /// Returns the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Panel::Board => Panel::History,
            Panel::History => Panel::Board,
        }
    }
}

/// Direction for the board cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Move the board cursor.
    MoveCursor(CursorMove),
    /// Place the next mark under the cursor.
    PlaceAtCursor,
    /// Place the next mark on a specific cell.
    PlaceAt(Position),
    /// Select the row above in the move list.
    SelectPrevious,
    /// Select the row below in the move list.
    SelectNext,
    /// Jump to the selected move list row.
    JumpToSelected,
    /// Move focus to the other panel.
    SwitchPanel,
    /// Flip the move list order.
    ToggleDirection,
    /// Discard the game and start over.
    NewGame,
    /// Leave the app.
    Quit,
}

/// Maps a key press to a UI event for the focused panel.
///
/// Digits 1-9 place directly on cell `digit - 1` regardless of focus.
#[instrument]
pub fn key_to_ui_event(key: KeyCode, focus: Panel) -> Option<UiEvent> {
    let event = match (key, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => UiEvent::Quit,
        (KeyCode::Tab | KeyCode::BackTab, _) => UiEvent::SwitchPanel,
        (KeyCode::Char('s'), _) => UiEvent::ToggleDirection,
        (KeyCode::Char('n'), _) => UiEvent::NewGame,
        (KeyCode::Char(c @ '1'..='9'), _) => {
            let digit = c.to_digit(10)? as usize;
            UiEvent::PlaceAt(Position::from_index(digit - 1)?)
        }

        (KeyCode::Up, Panel::Board) => UiEvent::MoveCursor(CursorMove::Up),
        (KeyCode::Down, Panel::Board) => UiEvent::MoveCursor(CursorMove::Down),
        (KeyCode::Left, Panel::Board) => UiEvent::MoveCursor(CursorMove::Left),
        (KeyCode::Right, Panel::Board) => UiEvent::MoveCursor(CursorMove::Right),
        (KeyCode::Enter | KeyCode::Char(' '), Panel::Board) => UiEvent::PlaceAtCursor,

        (KeyCode::Up, Panel::History) => UiEvent::SelectPrevious,
        (KeyCode::Down, Panel::History) => UiEvent::SelectNext,
        (KeyCode::Enter | KeyCode::Char(' '), Panel::History) => UiEvent::JumpToSelected,

        _ => return None,
    };
    Some(event)
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: CursorMove) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        CursorMove::Up => row.checked_sub(1).map(|r| (r, col)),
        CursorMove::Down => Some((row + 1, col)),
        CursorMove::Left => col.checked_sub(1).map(|c| (row, c)),
        CursorMove::Right => Some((row, col + 1)),
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
