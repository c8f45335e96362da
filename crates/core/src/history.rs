//! Move log entries and the branching policy for plays made after a jump.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{cell_coords, Player, GAME_START_DESC};

/// One entry of the move log.
///
/// Entries are immutable once recorded; `board` is the position *after*
/// the move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    board: Board,
    description: String,
    move_index: usize,
    cell: Option<usize>,
    player: Option<Player>,
}

impl Move {
    /// The initial entry: empty board, index 0.
    pub fn game_start() -> Self {
        Self {
            board: Board::new(),
            description: GAME_START_DESC.to_string(),
            move_index: 0,
            cell: None,
            player: None,
        }
    }

    /// A played move at `cell` producing `board`.
    pub fn played(board: Board, player: Player, cell: usize, move_index: usize) -> Self {
        Self {
            board,
            description: describe_move(player, cell),
            move_index,
            cell: Some(cell),
            player: Some(player),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn move_index(&self) -> usize {
        self.move_index
    }

    /// Cell that was marked (None for the initial entry)
    pub fn cell(&self) -> Option<usize> {
        self.cell
    }

    /// Player that moved (None for the initial entry)
    pub fn player(&self) -> Option<Player> {
        self.player
    }
}

/// `"{symbol} move to (row, col)"`, 1-based.
pub fn describe_move(player: Player, cell: usize) -> String {
    let (row, col) = cell_coords(cell);
    format!("{} move to ({}, {})", player, row + 1, col + 1)
}

/// What happens to later entries when a move is played while viewing an
/// earlier step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Keep every entry. The new move branches from the viewed board and is
    /// appended after the full log.
    #[default]
    Append,
    /// Discard entries after the viewed step before appending.
    Truncate,
}

impl HistoryMode {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "append" | "keep" => Some(HistoryMode::Append),
            "truncate" | "undo" => Some(HistoryMode::Truncate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryMode::Append => "append",
            HistoryMode::Truncate => "truncate",
        }
    }
}

impl std::fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
