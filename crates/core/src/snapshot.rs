use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{Cell, Phase, Player, BOARD_CELLS};

/// One row of the move list, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveEntry {
    pub move_index: usize,
    pub label: String,
    /// True for the entry under the cursor.
    pub selected: bool,
}

/// Everything a presentation layer needs for one frame.
///
/// Produced by [`GameState::snapshot`](crate::GameState::snapshot); owns its
/// data so the view never borrows game state across a frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: [Cell; BOARD_CELLS],
    pub winning_line: ArrayVec<usize, 3>,
    pub moves: Vec<MoveEntry>,
    pub current_step: usize,
    pub history_len: usize,
    pub next_player: Player,
    pub sort_descending: bool,
    pub status: String,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_line.contains(&index)
    }

    /// Whether a click on a cell could be accepted.
    pub fn playable(&self, index: usize) -> bool {
        !self.phase.is_concluded() && matches!(self.board.get(index), Some(None))
    }

    /// Position of the selected entry within `moves`.
    pub fn selected_row(&self) -> Option<usize> {
        self.moves.iter().position(|m| m.selected)
    }

    /// Cheap change detector for render/title throttling.
    pub fn fingerprint(&self) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut h = std::collections::hash_map::DefaultHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}
