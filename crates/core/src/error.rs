use thiserror::Error;

use crate::types::Player;

/// Reasons a game intent was rejected.
///
/// Rejected intents never change state. The silent operations
/// ([`GameState::apply_move`](crate::GameState::apply_move),
/// [`GameState::jump_to`](crate::GameState::jump_to)) log these and return `false`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("cell index {0} is off the board")]
    CellOutOfRange(usize),

    #[error("cell {0} is already taken")]
    CellOccupied(usize),

    #[error("game already won by {0}")]
    GameConcluded(Player),

    #[error("history step {step} out of range (history has {len} entries)")]
    StepOutOfRange { step: usize, len: usize },
}

/// Convenience Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;
