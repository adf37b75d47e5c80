//! TUI Blocks (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_blocks::{core,input,store,term,types}` and
//! owns the binary's runtime configuration.

pub mod config;

pub use tui_blocks_core as core;
pub use tui_blocks_input as input;
pub use tui_blocks_store as store;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;
