//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and the session state
//! machine. It has no dependencies on the terminal or on the filesystem:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable through the command API
//! - **Portable**: Runs headless as easily as behind a terminal
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 well of locked cells and full-row clearing
//! - [`piece`]: Shape matrices, spawn catalogue and clockwise rotation
//! - [`collision`]: The single placement check every mutation goes through
//! - [`scoring`]: Triangular line-clear scoring
//! - [`rng`]: Uniform, seeded piece generation
//! - [`score_store`]: Per-difficulty best score capability
//! - [`engine`]: One game, from first spawn to game over
//! - [`session`]: Menu / play / game over / quit routing
//! - [`snapshot`]: Read-only views for the renderer
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn draws kind and color independently
//! - **Plain rotation**: clockwise matrix turn, rejected if it does not fit (no kicks)
//! - **Immediate lock**: a piece locks the moment it cannot descend
//! - **Scoring**: clearing `n` rows at once awards `100 * n * (n + 1) / 2`
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{GameEngine, NoScoreStore};
//! use tui_blocks_core::types::{Command, Difficulty};
//!
//! let mut game = GameEngine::new(Difficulty::Medium, 12345, NoScoreStore);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::RotateCw);
//! game.apply(Command::HardDrop);
//!
//! assert_eq!(game.pieces_locked(), 1);
//! ```
//!
//! # Timing
//!
//! Call [`GameEngine::tick`](engine::GameEngine::tick) with the milliseconds elapsed
//! since the last call. The piece falls one row each time the accumulated time reaches
//! the difficulty's fall interval.

pub mod collision;
pub mod engine;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod score_store;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use collision::{fits, piece_fits};
pub use engine::{EnginePhase, GameEngine, LockOutcome};
pub use grid::Grid;
pub use piece::{spawn_shape, Piece, Shape};
pub use rng::PieceGenerator;
pub use score_store::{MemoryScoreStore, NoScoreStore, ScoreStore};
pub use scoring::line_clear_score;
pub use session::{SessionController, SessionState};
pub use snapshot::{GameSnapshot, MenuEntry, MenuSnapshot, PieceSnapshot, SessionSnapshot};
