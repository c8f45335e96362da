//! Game state module - owns the move log and the cursor into it
//!
//! The log is append-only (unless [`HistoryMode::Truncate`] is selected) and
//! the cursor (`current_step`) picks which board is viewed and played from.
//! The player to move is stored: a jump sets it from the step's parity and
//! every accepted move hands the turn to the opponent. Winner and status text
//! are derived from the viewed board on demand.

use tracing::{debug, info};

use crate::board::Board;
use crate::error::{GameError, Result};
use crate::history::{HistoryMode, Move};
use crate::rules::{board_phase, evaluate_board, WinResult};
use crate::snapshot::{GameSnapshot, MoveEntry};
use crate::types::{Intent, Phase, Player, BOARD_CELLS};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Move>,
    current_step: usize,
    next_player: Player,
    /// Display order of the move list only; storage order never changes.
    sort_descending: bool,
    mode: HistoryMode,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a new game with the default (append) history mode
    pub fn new() -> Self {
        Self::with_mode(HistoryMode::default())
    }

    /// Create a new game with an explicit history mode
    pub fn with_mode(mode: HistoryMode) -> Self {
        Self {
            history: vec![Move::game_start()],
            current_step: 0,
            next_player: Player::X,
            sort_descending: false,
            mode,
        }
    }

    /// Set the initial move-list order.
    pub fn with_sort_descending(mut self, descending: bool) -> Self {
        self.sort_descending = descending;
        self
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn sort_descending(&self) -> bool {
        self.sort_descending
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// The entry under the cursor
    pub fn current(&self) -> &Move {
        &self.history[self.current_step]
    }

    /// The board under the cursor
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player to move next.
    ///
    /// X after a jump to an even step, O after a jump to an odd one.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn x_is_next(&self) -> bool {
        self.next_player() == Player::X
    }

    pub fn win_result(&self) -> WinResult {
        evaluate_board(self.board())
    }

    pub fn phase(&self) -> Phase {
        board_phase(self.board())
    }

    /// Human-readable status of the viewed board.
    pub fn status_text(&self) -> String {
        match self.phase() {
            Phase::Won(player) => format!("Winner: {}", player),
            Phase::Draw => "A dead heat".to_string(),
            Phase::InProgress => format!("Next player: {}", self.next_player()),
        }
    }

    /// Log entries in the order the move list shows them.
    pub fn moves_in_display_order(&self) -> Vec<&Move> {
        let mut moves: Vec<&Move> = self.history.iter().collect();
        if self.sort_descending {
            moves.reverse();
        }
        moves
    }

    /// Play the next mark on `cell`, reporting why a move was refused.
    ///
    /// Checks, in order: the index is on the board, the viewed board has no
    /// winner, the cell is empty. On error the state is unchanged.
    pub fn try_apply_move(&mut self, cell: usize) -> Result<&Move> {
        if cell >= BOARD_CELLS {
            return Err(GameError::CellOutOfRange(cell));
        }

        let base = *self.board();
        if let Some(winner) = evaluate_board(&base).winner {
            return Err(GameError::GameConcluded(winner));
        }
        if !base.is_empty_at(cell) {
            return Err(GameError::CellOccupied(cell));
        }

        let player = self.next_player;
        let mut board = base;
        board.set(cell, Some(player));

        if self.mode == HistoryMode::Truncate {
            self.history.truncate(self.current_step + 1);
        }

        let move_index = self.history.len();
        self.history.push(Move::played(board, player, cell, move_index));
        self.current_step = move_index;
        self.next_player = player.opponent();

        let recorded = &self.history[move_index];
        info!(
            move_index,
            cell,
            player = player.as_str(),
            "{}",
            recorded.description()
        );
        Ok(recorded)
    }

    /// Play the next mark on `cell`.
    ///
    /// Illegal moves are ignored: returns false and leaves the state unchanged.
    pub fn apply_move(&mut self, cell: usize) -> bool {
        match self.try_apply_move(cell) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "move ignored");
                false
            }
        }
    }

    /// Move the cursor to `step`. Out-of-range steps are rejected.
    pub fn try_jump_to(&mut self, step: usize) -> Result<()> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.current_step = step;
        self.next_player = if step % 2 == 0 { Player::X } else { Player::O };
        debug!(step, next = self.next_player.as_str(), "jumped");
        Ok(())
    }

    /// Move the cursor to `step`; returns false (no-op) when out of range.
    pub fn jump_to(&mut self, step: usize) -> bool {
        match self.try_jump_to(step) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "jump ignored");
                false
            }
        }
    }

    /// Reverse the move-list display order.
    pub fn toggle_sort(&mut self) {
        self.sort_descending = !self.sort_descending;
        debug!(descending = self.sort_descending, "sort toggled");
    }

    /// Start a fresh game, keeping the history mode and display order.
    pub fn restart(&mut self) {
        self.history.clear();
        self.history.push(Move::game_start());
        self.current_step = 0;
        self.next_player = Player::X;
        info!("game restarted");
    }

    /// Apply a user intent. Returns whether anything changed.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::SelectCell(cell) => self.apply_move(cell),
            Intent::SelectHistoryStep(step) => {
                let before = self.current_step;
                self.jump_to(step) && before != step
            }
            Intent::ToggleSortOrder => {
                self.toggle_sort();
                true
            }
            Intent::Restart => {
                let changed = self.history.len() > 1 || self.current_step != 0;
                self.restart();
                changed
            }
        }
    }

    /// Read-only snapshot for presentation layers.
    pub fn snapshot(&self) -> GameSnapshot {
        let win = self.win_result();
        let moves = self
            .moves_in_display_order()
            .into_iter()
            .map(|m| MoveEntry {
                move_index: m.move_index(),
                label: m.description().to_string(),
                selected: m.move_index() == self.current_step,
            })
            .collect();

        GameSnapshot {
            board: *self.board().cells(),
            winning_line: win.line,
            moves,
            current_step: self.current_step,
            history_len: self.history.len(),
            next_player: self.next_player(),
            sort_descending: self.sort_descending,
            status: self.status_text(),
            phase: self.phase(),
        }
    }
}
