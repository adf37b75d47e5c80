//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the view draws snapshots into a plain
//! framebuffer and the renderer flushes that framebuffer to the terminal.
//!
//! Goals:
//! - Keep `core` free of terminal concerns
//! - Keep the view pure so layouts are unit-testable
//! - Control aspect ratio directly (2 columns per well cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{palette, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
