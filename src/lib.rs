//! TUI tic-tac-toe (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_tictactoe::{core,input,term,types}`
//! and hosts the application layer: configuration, logging, the interactive
//! loop and the headless JSON driver.

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;

pub mod app;
pub mod config;
pub mod headless;
pub mod logging;
