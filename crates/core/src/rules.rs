//! Win detection.
//!
//! Lines are checked in [`WIN_LINES`] order, so when a single move completes
//! two lines at once the reported line is the first one in that order.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{Phase, Player, WIN_LINES};

/// Result of evaluating a board.
///
/// `line` is empty when there is no winner, otherwise it holds exactly the
/// three indices of the winning triple.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinResult {
    pub winner: Option<Player>,
    pub line: ArrayVec<usize, 3>,
}

impl WinResult {
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether `index` is part of the winning line
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Evaluate a board for a completed line.
pub fn evaluate_board(board: &Board) -> WinResult {
    let cells = board.cells();
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(player) = cells[a] {
            if cells[b] == Some(player) && cells[c] == Some(player) {
                return WinResult {
                    winner: Some(player),
                    line: ArrayVec::from(line),
                };
            }
        }
    }
    WinResult::none()
}

/// Phase of a board: won, drawn (full without a line), or still in progress.
pub fn board_phase(board: &Board) -> Phase {
    match evaluate_board(board).winner {
        Some(player) => Phase::Won(player),
        None if board.is_full() => Phase::Draw,
        None => Phase::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BOARD_CELLS;

    #[test]
    fn empty_board_has_no_winner() {
        let result = evaluate_board(&Board::new());
        assert_eq!(result, WinResult::none());
        assert!(result.line.is_empty());
    }

    #[test]
    fn every_line_is_detected_for_both_players() {
        for player in [Player::X, Player::O] {
            for line in WIN_LINES {
                let mut board = Board::new();
                for i in line {
                    board.set(i, Some(player));
                }
                let result = evaluate_board(&board);
                assert_eq!(result.winner, Some(player), "line {:?}", line);
                assert_eq!(result.line.as_slice(), &line[..]);
            }
        }
    }

    #[test]
    fn two_in_a_row_is_not_a_win() {
        for line in WIN_LINES {
            let mut board = Board::new();
            board.set(line[0], Some(Player::X));
            board.set(line[1], Some(Player::X));
            board.set(line[2], Some(Player::O));
            assert_eq!(evaluate_board(&board).winner, None);
        }
    }

    #[test]
    fn simultaneous_lines_resolve_in_priority_order() {
        // Top row and left column both complete; the row comes first.
        let board = Board::parse("XXX/XOO/XO.").unwrap();
        assert_eq!(evaluate_board(&board).line.as_slice(), &[0, 1, 2]);

        // Left column and main diagonal; the column comes first.
        let board = Board::parse("XO./XXO/X.X").unwrap();
        let result = evaluate_board(&board);
        assert_eq!(result.winner, Some(Player::X));
        assert_eq!(result.line.as_slice(), &[0, 3, 6]);
    }

    #[test]
    fn phase_of_full_board_without_line_is_draw() {
        let board = Board::parse("XOX/XOO/OXX").unwrap();
        assert!(board.is_full());
        assert_eq!(board_phase(&board), Phase::Draw);
        assert_eq!(board_phase(&Board::new()), Phase::InProgress);
        let won = Board::parse("XXX/OO./...").unwrap();
        assert_eq!(board_phase(&won), Phase::Won(Player::X));
        assert!((0..BOARD_CELLS).filter(|&i| evaluate_board(&won).contains(i)).eq(0..3));
    }
}
