//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]. Which table applies
//! depends on what the session is showing: the difficulty menu or a game.
//! Unknown keys map to `None` and are simply ignored.

pub mod map;

pub use tui_blocks_types as types;

pub use map::{map_game_key, map_menu_key, should_quit};
