//! Board module - the 3x3 grid
//!
//! Uses a flat array in row-major order. `Board` is `Copy`, so every history
//! entry owns its own post-move snapshot without sharing.

use serde::{Deserialize, Serialize};

use crate::types::{cell_coords, Cell, Player, BOARD_CELLS};

/// The game board - 9 cells, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Get cell at index
    /// Returns None if out of bounds
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Get cell at zero-based (row, col)
    pub fn get_rc(&self, row: usize, col: usize) -> Option<Cell> {
        crate::types::cell_index(row, col).and_then(|i| self.get(i))
    }

    /// Set cell at index
    /// Returns false if out of bounds
    pub fn set(&mut self, index: usize, cell: Cell) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Check whether a cell is on the board and empty
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(None))
    }

    /// Returns true when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of marked cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indices of empty cells, ascending
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Formats the board as three text rows, `.` for empty cells.
    pub fn to_rows(&self) -> [String; 3] {
        let mut rows: [String; 3] = Default::default();
        for (i, cell) in self.cells.iter().enumerate() {
            let (row, _) = cell_coords(i);
            rows[row].push_str(cell.map(|p| p.as_str()).unwrap_or("."));
        }
        rows
    }

    /// Parse a board from a 9-character pattern (`X`, `O`, `.`/`-`/space),
    /// ignoring `/` and newlines as row separators.
    ///
    /// Mostly useful in tests and benchmarks.
    pub fn parse(pattern: &str) -> Option<Self> {
        let mut cells = [None; BOARD_CELLS];
        let mut i = 0;
        for ch in pattern.chars() {
            let cell = match ch {
                '/' | '\n' | '|' => continue,
                'x' | 'X' => Some(Player::X),
                'o' | 'O' => Some(Player::O),
                '.' | '-' | ' ' => None,
                _ => return None,
            };
            if i >= BOARD_CELLS {
                return None;
            }
            cells[i] = cell;
            i += 1;
        }
        (i == BOARD_CELLS).then_some(Self { cells })
    }
}
