//! Terminal input module.
//!
//! Maps `crossterm` key events into [`KeyAction`]s and resolves those into
//! game [`Intent`](crate::types::Intent)s with an [`InputHandler`] that owns
//! the board cursor. Mouse hit-testing lives with the layout in the `term`
//! crate.

pub mod handler;
pub mod map;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit, KeyAction};
