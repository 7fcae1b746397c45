//! Tests for win detection over whole boards.

use rewind_tictactoe::{Board, LINES, Mark, Position, Square, WinResult, detect_win};

fn board_from(cells: &str) -> Board {
    let mut board = Board::new();
    for (pos, ch) in Position::ALL.into_iter().zip(cells.chars()) {
        match ch {
            'X' => board.set(pos, Square::Occupied(Mark::X)),
            'O' => board.set(pos, Square::Occupied(Mark::O)),
            _ => {}
        }
    }
    board
}

#[test]
fn test_boards_without_three_in_a_row() {
    // The last board: X holds 0, 2, 4 and O holds 1, 3, 5.
    for cells in [".........", "XOXXOOOXX", "XX.OO....", "XOXOXO..."] {
        let board = board_from(cells);
        assert_eq!(detect_win(&board), WinResult::NoWinner, "board {cells}");
    }
}

#[test]
fn test_every_line_is_detected() {
    for line in LINES {
        for mark in [Mark::X, Mark::O] {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(mark));
            }
            let found = detect_win(&board).line().expect("line complete");
            assert_eq!(*found.cells(), line);
            assert_eq!(*found.mark(), mark);
        }
    }
}

#[test]
fn test_earliest_line_wins_ties() {
    // Top row and left column are both complete; the row comes first.
    let board = board_from("XXXX..X..");
    let found = detect_win(&board).line().expect("two lines complete");
    assert_eq!(found.indices(), [0, 1, 2]);

    // Middle column and both diagonals share the center.
    let board = board_from("OOOOOOOOO");
    let found = detect_win(&board).line().expect("full board");
    assert_eq!(found.indices(), [0, 1, 2]);

    let board = board_from("X.X.X.X.X");
    let found = detect_win(&board).line().expect("diagonals complete");
    assert_eq!(found.indices(), [0, 4, 8]);
}

#[test]
fn test_other_cells_do_not_matter() {
    let board = board_from("OX.OXXO.X");
    let found = detect_win(&board).line().expect("left column");
    assert_eq!(found.indices(), [0, 3, 6]);
    assert_eq!(*found.mark(), Mark::O);
}
