//! Invariants on the shape of the recorded history.

use super::super::{GameState, Mark, Square};
use super::Invariant;

/// Invariant: the history starts with a single empty-board entry.
pub struct RootIsEmpty;

impl Invariant<GameState> for RootIsEmpty {
    fn holds(game: &GameState) -> bool {
        game.history()
            .first()
            .is_some_and(|entry| entry.board().is_blank() && entry.last_moved().is_none())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

/// Invariant: each entry adds exactly one mark to its predecessor.
///
/// The added mark sits on `last_moved` and belongs to the player whose turn
/// it was, so entry `k` holds X when `k` is odd and O when `k` is even.
pub struct ConsistentHistory;

impl Invariant<GameState> for ConsistentHistory {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).enumerate().all(|(prev_step, pair)| {
            let [prev, next] = pair else {
                return false;
            };
            let Some(pos) = *next.last_moved() else {
                return false;
            };
            prev.board().diff(next.board()) == vec![pos]
                && prev.board().is_empty(pos)
                && next.board().get(pos) == Square::Occupied(Mark::for_step(prev_step))
        })
    }

    fn description() -> &'static str {
        "Each history entry adds one mark for the player whose turn it was"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, HistoryEntry, Position};

    #[test]
    fn test_played_game_holds() {
        let game = GameState::new()
            .apply_move(Position::Center)
            .apply_move(Position::TopLeft)
            .apply_move(Position::BottomRight);
        assert!(RootIsEmpty::holds(&game));
        assert!(ConsistentHistory::holds(&game));
    }

    #[test]
    fn test_marked_root_violates() {
        let mut game = GameState::new();
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::X));
        game.history[0] = HistoryEntry {
            board,
            last_moved: None,
        };
        assert!(!RootIsEmpty::holds(&game));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut game = GameState::new().apply_move(Position::Center);
        game.history[1] = HistoryEntry {
            board: Board::new().with_mark(Position::Center, Mark::O),
            last_moved: Some(Position::Center),
        };
        assert!(!ConsistentHistory::holds(&game));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut game = GameState::new().apply_move(Position::Center);
        game.history[1] = HistoryEntry {
            board: Board::new()
                .with_mark(Position::Center, Mark::X)
                .with_mark(Position::TopLeft, Mark::X),
            last_moved: Some(Position::Center),
        };
        assert!(!ConsistentHistory::holds(&game));
    }
}
