//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic attached, making them usable
//! in any context (core rules, terminal rendering, the headless JSON driver).
//!
//! # Board Layout
//!
//! The board is 3x3, stored row-major as 9 cells:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! Index `i` maps to row `i / 3` and column `i % 3`.
//!
//! # Win Lines
//!
//! [`WIN_LINES`] lists the 8 triples in evaluation priority order: rows top to
//! bottom, columns left to right, then the main diagonal and the anti-diagonal.
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{cell_coords, Intent, Player, BOARD_CELLS};
//!
//! assert_eq!(BOARD_CELLS, 9);
//! assert_eq!(Player::X.opponent(), Player::O);
//! assert_eq!(Player::from_str("o"), Some(Player::O));
//! assert_eq!(cell_coords(5), (1, 2));
//!
//! let intent = Intent::SelectCell(4);
//! assert_eq!(intent.as_str(), "selectCell");
//! ```

use serde::{Deserialize, Serialize};

/// Board side length (3 rows, 3 columns)
pub const BOARD_SIDE: usize = 3;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Description of the initial history entry
pub const GAME_START_DESC: &str = "Game start";

/// The 8 winning triples, in evaluation priority order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A player mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other player
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Player::X),
            "o" => Some(Player::O),
            _ => None,
        }
    }

    /// Display symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cell on the board (None = empty, Some = marked by a player)
pub type Cell = Option<Player>;

/// Convert a cell index into zero-based `(row, col)`.
#[inline]
pub fn cell_coords(index: usize) -> (usize, usize) {
    (index / BOARD_SIDE, index % BOARD_SIDE)
}

/// Convert zero-based `(row, col)` into a cell index.
///
/// Returns None if either coordinate is off the board.
#[inline]
pub fn cell_index(row: usize, col: usize) -> Option<usize> {
    if row >= BOARD_SIDE || col >= BOARD_SIDE {
        return None;
    }
    Some(row * BOARD_SIDE + col)
}

/// User intents accepted by the game state.
///
/// These are the only ways the presentation layer can change the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Intent {
    /// Play the next mark on a cell (0..=8).
    SelectCell(usize),
    /// Move the history cursor to a move index.
    SelectHistoryStep(usize),
    /// Reverse the display order of the move list.
    ToggleSortOrder,
    /// Start over with an empty board.
    Restart,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::SelectCell(_) => "selectCell",
            Intent::SelectHistoryStep(_) => "selectHistoryStep",
            Intent::ToggleSortOrder => "toggleSortOrder",
            Intent::Restart => "restart",
        }
    }
}

/// Phase of the currently viewed board.
///
/// Conclusion is a property of the viewed board, not of the whole log:
/// jumping back from a concluded board yields an in-progress one again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "winner", rename_all = "camelCase")]
pub enum Phase {
    InProgress,
    Won(Player),
    Draw,
}

impl Phase {
    pub fn is_concluded(&self) -> bool {
        !matches!(self, Phase::InProgress)
    }
}
