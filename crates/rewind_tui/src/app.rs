//! Application state and logic.

use rewind_tictactoe::{GameState, GameView, Intent, Position};
use tracing::{debug, info, instrument};

use super::input::{Panel, UiEvent, move_cursor};

/// Main application state.
///
/// Owns the one [`GameState`] of the session plus the cursor, the move list
/// selection and the focused panel.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    selected_step: usize,
    focus: Panel,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given initial list order.
    #[instrument]
    pub fn new(list_ascending: bool) -> Self {
        Self {
            game: GameState::new().with_list_ascending(list_ascending),
            cursor: Position::Center,
            selected_step: 0,
            focus: Panel::Board,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Render data for the current game.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Board cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// History step of the selected move list row.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Panel that receives navigation keys.
    pub fn focus(&self) -> Panel {
        self.focus
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a UI event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            UiEvent::PlaceAtCursor => self.place(self.cursor),
            UiEvent::PlaceAt(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            UiEvent::SelectPrevious => self.shift_selection(-1),
            UiEvent::SelectNext => self.shift_selection(1),
            UiEvent::JumpToSelected => {
                self.dispatch(Intent::JumpRequested(self.selected_step));
            }
            UiEvent::SwitchPanel => {
                self.focus = self.focus.toggle();
                if self.focus == Panel::History {
                    self.selected_step = self.game.current_step();
                }
            }
            UiEvent::ToggleDirection => self.dispatch(Intent::ToggleDirectionRequested),
            UiEvent::NewGame => self.restart(),
            UiEvent::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Restarts the game, keeping the current list order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        let ascending = self.game.list_ascending();
        self.game = GameState::new().with_list_ascending(ascending);
        self.selected_step = 0;
    }

    fn place(&mut self, pos: Position) {
        self.dispatch(Intent::CellClicked(pos));
        self.selected_step = self.game.current_step();
    }

    fn dispatch(&mut self, intent: Intent) {
        debug!(%intent, "Dispatching intent");
        self.game = std::mem::take(&mut self.game).reduce(intent);
    }

    /// Moves the selection `delta` rows in display order, clamped to the list.
    fn shift_selection(&mut self, delta: isize) {
        let moves = self.game.move_descriptions();
        let Some(row) = moves.iter().position(|m| *m.step() == self.selected_step) else {
            self.selected_step = self.game.current_step();
            return;
        };
        let target = row.saturating_add_signed(delta).min(moves.len() - 1);
        self.selected_step = *moves[target].step();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CursorMove;
    use rewind_tictactoe::{Mark, Status};

    fn app_with_moves(cells: &[usize]) -> App {
        let mut app = App::default();
        for idx in cells {
            let pos = Position::from_index(*idx).expect("cell index");
            app.handle_event(UiEvent::PlaceAt(pos));
        }
        app
    }

    #[test]
    fn test_place_at_cursor() {
        let mut app = App::default();
        app.handle_event(UiEvent::MoveCursor(CursorMove::Up));
        app.handle_event(UiEvent::PlaceAtCursor);
        assert_eq!(
            app.game().current_board().get(Position::TopCenter).mark(),
            Some(Mark::X)
        );
        assert_eq!(app.selected_step(), 1);
    }

    #[test]
    fn test_selection_walks_display_order() {
        let mut app = app_with_moves(&[0, 4, 8]);
        app.handle_event(UiEvent::SwitchPanel);
        assert_eq!(app.focus(), Panel::History);
        assert_eq!(app.selected_step(), 3);

        app.handle_event(UiEvent::SelectNext);
        assert_eq!(app.selected_step(), 3);
        app.handle_event(UiEvent::SelectPrevious);
        app.handle_event(UiEvent::SelectPrevious);
        assert_eq!(app.selected_step(), 1);

        app.handle_event(UiEvent::ToggleDirection);
        app.handle_event(UiEvent::SelectNext);
        assert_eq!(app.selected_step(), 0);
        app.handle_event(UiEvent::SelectNext);
        assert_eq!(app.selected_step(), 0);
    }

    #[test]
    fn test_jump_to_selected() {
        let mut app = app_with_moves(&[0, 3, 1, 4, 2]);
        assert_eq!(app.game().current_status(), Status::Winner(Mark::X));

        app.handle_event(UiEvent::SwitchPanel);
        app.handle_event(UiEvent::SelectPrevious);
        app.handle_event(UiEvent::JumpToSelected);
        assert_eq!(app.game().current_step(), 4);
        assert_eq!(app.game().last_jump(), Some(4));
        assert_eq!(app.game().current_status(), Status::NextPlayer(Mark::X));
    }

    #[test]
    fn test_new_game_keeps_list_order() {
        let mut app = app_with_moves(&[0, 4]);
        app.handle_event(UiEvent::ToggleDirection);
        app.handle_event(UiEvent::NewGame);
        assert_eq!(app.game().history().len(), 1);
        assert!(!app.game().list_ascending());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(false);
        assert!(!app.game().list_ascending());
        app.handle_event(UiEvent::Quit);
        assert!(app.should_quit());
    }
}
