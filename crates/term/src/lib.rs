//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It does not use a widget
//! toolkit; it renders a [`GameSnapshot`](crate::core::GameSnapshot) into a
//! plain framebuffer that is then diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so layout and hit-testing can be unit-tested
//! - Mirror the status line into the window title without redundant writes

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod title_sync;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Layout, PanelLayout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use title_sync::TitleSync;
