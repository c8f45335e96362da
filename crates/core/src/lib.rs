//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and the authoritative game state.
//! It has **no dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: the same intents always produce the same log
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: the terminal view and the headless JSON driver share it
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 grid with flat storage
//! - [`rules`]: win detection over the 8 fixed lines
//! - [`history`]: immutable move log entries and the branching policy
//! - [`game_state`]: the move log, the cursor into it, and the intent handlers
//! - [`snapshot`]: the read-only per-frame view handed to presentation layers
//! - [`error`]: reasons an intent was refused
//!
//! # Game Rules
//!
//! - X always moves first; each accepted move hands the turn over, and a
//!   jump to step `k` makes X next exactly when `k` is even
//! - Moves on an occupied cell, or on a board that already has a winner, are ignored
//! - The move log only grows (unless [`HistoryMode::Truncate`] is chosen);
//!   jumping moves a cursor and never rewrites entries
//! - Move-list order can be reversed for display without touching storage
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::GameState;
//! use tui_tictactoe_types::Intent;
//!
//! let mut game = GameState::new();
//! for cell in [0, 1, 3, 4, 6] {
//!     game.dispatch(Intent::SelectCell(cell));
//! }
//!
//! assert_eq!(game.status_text(), "Winner: X");
//! assert_eq!(game.win_result().line.as_slice(), &[0, 3, 6]);
//!
//! // Jumping back re-opens play from that position.
//! game.dispatch(Intent::SelectHistoryStep(2));
//! assert_eq!(game.status_text(), "Next player: X");
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod history;
pub mod rules;
pub mod snapshot;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::GameError;
pub use game_state::GameState;
pub use history::{describe_move, HistoryMode, Move};
pub use rules::{board_phase, evaluate_board, WinResult};
pub use snapshot::{GameSnapshot, MoveEntry};
