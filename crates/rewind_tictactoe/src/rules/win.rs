//! Win detection logic for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::super::{Board, Mark, Position, Square};

/// The eight winning lines, in detection priority order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three squares in a row holding the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct WinningLine {
    /// The three positions, in [`LINES`] order.
    cells: [Position; 3],
    /// The mark occupying all three cells.
    mark: Mark,
}

impl WinningLine {
    /// Returns true if `pos` is one of the three winning cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Cell indices (0-8) of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.cells.map(Position::to_index)
    }
}

/// Outcome of scanning a board for three in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinResult {
    /// No line is complete.
    NoWinner,
    /// The first complete line found.
    Winner(WinningLine),
}

impl WinResult {
    /// Returns the winning line, if any.
    pub fn line(self) -> Option<WinningLine> {
        match self {
            WinResult::NoWinner => None,
            WinResult::Winner(line) => Some(line),
        }
    }

    /// Returns true if the board has a winner.
    pub fn is_winner(self) -> bool {
        matches!(self, WinResult::Winner(_))
    }
}

/// Scans the board for a completed line.
///
/// Lines are checked in [`LINES`] order and the first match is returned,
/// so when several lines are complete the result is still deterministic.
#[instrument(skip(board))]
pub fn detect_win(board: &Board) -> WinResult {
    for cells in LINES {
        let [a, b, c] = cells;
        if let Square::Occupied(mark) = board.get(a)
            && board.get(b) == Square::Occupied(mark)
            && board.get(c) == Square::Occupied(mark)
        {
            return WinResult::Winner(WinningLine { cells, mark });
        }
    }

    WinResult::NoWinner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(x: &[Position], o: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in x {
            board.set(*pos, Square::Occupied(Mark::X));
        }
        for pos in o {
            board.set(*pos, Square::Occupied(Mark::O));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect_win(&Board::new()), WinResult::NoWinner);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            &[Position::MiddleLeft, Position::Center],
        );
        let line = detect_win(&board).line().expect("top row wins");
        assert_eq!(line.indices(), [0, 1, 2]);
        assert_eq!(*line.mark(), Mark::X);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            &[Position::TopLeft, Position::TopCenter],
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        let line = detect_win(&board).line().expect("anti-diagonal wins");
        assert_eq!(line.indices(), [2, 4, 6]);
        assert_eq!(*line.mark(), Mark::O);
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopLeft));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[Position::TopLeft, Position::TopCenter], &[]);
        assert!(!detect_win(&board).is_winner());
    }

    #[test]
    fn test_mixed_marks_do_not_win() {
        let board = board_with(
            &[Position::TopLeft, Position::TopRight],
            &[Position::TopCenter],
        );
        assert_eq!(detect_win(&board), WinResult::NoWinner);
    }
}
