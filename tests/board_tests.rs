//! Board and win-detection tests

use tui_tictactoe::core::{evaluate_board, Board};
use tui_tictactoe::types::{Player, BOARD_CELLS, WIN_LINES};

#[test]
fn test_empty_board_has_no_winner() {
    let board = Board::new();
    let result = evaluate_board(&board);
    assert_eq!(result.winner, None);
    assert!(result.line.is_empty());
}

#[test]
fn test_every_line_wins_regardless_of_other_cells() {
    for line in WIN_LINES {
        // Fill the rest with a non-winning O pattern.
        let mut board = Board::new();
        for i in 0..BOARD_CELLS {
            if !line.contains(&i) && i % 2 == 1 {
                board.set(i, Some(Player::O));
            }
        }
        for i in line {
            board.set(i, Some(Player::X));
        }

        let result = evaluate_board(&board);
        assert_eq!(result.winner, Some(Player::X), "line {:?}", line);
        assert_eq!(result.line.as_slice(), &line[..], "line {:?}", line);
    }
}

#[test]
fn test_fewer_than_three_in_a_line_is_no_win() {
    let patterns = ["XX./OO./...", "X.O/.X./O..", "XOX/OXO/O.O"];
    for p in patterns {
        let board = Board::parse(p).unwrap();
        assert_eq!(evaluate_board(&board).winner, None, "pattern {}", p);
    }
}

#[test]
fn test_mixed_line_is_not_a_win() {
    let board = Board::parse("XXO/.../...").unwrap();
    assert_eq!(evaluate_board(&board).winner, None);
}

#[test]
fn test_board_get_and_set() {
    let mut board = Board::new();
    assert!(board.set(4, Some(Player::O)));
    assert_eq!(board.get(4), Some(Some(Player::O)));
    assert_eq!(board.get_rc(1, 1), Some(Some(Player::O)));
    assert!(!board.set(BOARD_CELLS, Some(Player::X)));
    assert_eq!(board.get(BOARD_CELLS), None);
}
