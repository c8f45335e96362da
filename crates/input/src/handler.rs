//! Resolves key actions into game intents.
//!
//! The handler owns the only piece of presentation state that is not part of
//! the game: the board cursor. Everything else is read from the snapshot.

use crate::core::GameSnapshot;
use crate::map::KeyAction;
use crate::types::{cell_coords, cell_index, Intent, BOARD_CELLS, BOARD_SIDE};

/// Board cursor plus key-to-intent resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputHandler {
    cursor: usize,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Cursor starts on the center cell.
    pub fn new() -> Self {
        Self { cursor: 4 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to `index`; ignored if off the board.
    pub fn set_cursor(&mut self, index: usize) {
        if index < BOARD_CELLS {
            self.cursor = index;
        }
    }

    /// Resolve a key action against the current snapshot.
    ///
    /// Cursor movement is handled here and yields no intent. Direct cell
    /// selection also moves the cursor so it follows the last played cell.
    pub fn handle(&mut self, action: KeyAction, snap: &GameSnapshot) -> Option<Intent> {
        let last_step = snap.history_len.saturating_sub(1);
        match action {
            KeyAction::Cell(index) => {
                self.set_cursor(index);
                Some(Intent::SelectCell(index))
            }
            KeyAction::CursorLeft => self.nudge(0, -1),
            KeyAction::CursorRight => self.nudge(0, 1),
            KeyAction::CursorUp => self.nudge(-1, 0),
            KeyAction::CursorDown => self.nudge(1, 0),
            KeyAction::Activate => Some(Intent::SelectCell(self.cursor)),
            KeyAction::StepBack => (snap.current_step > 0)
                .then(|| Intent::SelectHistoryStep(snap.current_step - 1)),
            KeyAction::StepForward => (snap.current_step < last_step)
                .then(|| Intent::SelectHistoryStep(snap.current_step + 1)),
            KeyAction::FirstStep => Some(Intent::SelectHistoryStep(0)),
            KeyAction::LastStep => Some(Intent::SelectHistoryStep(last_step)),
            KeyAction::ToggleSort => Some(Intent::ToggleSortOrder),
            KeyAction::Restart => Some(Intent::Restart),
        }
    }

    /// Move the cursor, wrapping around the edges.
    fn nudge(&mut self, drow: isize, dcol: isize) -> Option<Intent> {
        let side = BOARD_SIDE as isize;
        let (row, col) = cell_coords(self.cursor);
        let row = (row as isize + drow).rem_euclid(side) as usize;
        let col = (col as isize + dcol).rem_euclid(side) as usize;
        if let Some(index) = cell_index(row, col) {
            self.cursor = index;
        }
        None
    }
}
