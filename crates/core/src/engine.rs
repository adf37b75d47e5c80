//! Game engine - one game from first spawn to game over
//!
//! This module ties together the grid, the current/next pieces, the piece generator
//! and scoring. It exposes the command API (move, rotate, drops, tick) and runs the
//! lock → line clear → score → spawn → game over transitions.
//!
//! Every mutation is checked with [`piece_fits`] before it is committed, so the
//! current piece never sits outside the side walls or below the floor and never
//! overlaps a locked cell on the visible grid.

use tracing::{debug, info};

use crate::collision::piece_fits;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::line_clear_score;
use crate::score_store::{NoScoreStore, ScoreStore};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Command, Difficulty};

/// Lifecycle of a single game.
///
/// Spawning happens inside the constructor, so a constructed engine is already
/// `Playing` (or `GameOver` when the supplied layout leaves no room to spawn).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    Playing,
    GameOver,
}

/// What a single lock did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockOutcome {
    /// True when a lock actually happened (false for no-ops after game over).
    pub locked: bool,
    pub lines_cleared: u32,
    /// Score awarded for the cleared rows.
    pub points: u32,
    /// True if this lock ended the game.
    pub game_over: bool,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameEngine<S = NoScoreStore> {
    grid: Grid,
    current: Piece,
    next: Piece,
    generator: PieceGenerator,
    difficulty: Difficulty,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    /// Milliseconds accumulated since the last automatic descent.
    fall_time_ms: u32,
    game_over: bool,
    new_high_score: bool,
    store: S,
}

impl<S: ScoreStore> GameEngine<S> {
    /// Start a game on an empty grid: spawn `current`, then `next`.
    pub fn new(difficulty: Difficulty, seed: u64, store: S) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let current = generator.spawn();
        let next = generator.spawn();
        Self::assemble(difficulty, generator, store, Grid::new(), current, next)
    }

    /// Start a game from an explicit grid and pieces.
    ///
    /// Used to resume or script specific situations. The usual spawn check applies:
    /// if `current` does not fit, the engine starts in `GameOver`.
    pub fn with_layout(
        difficulty: Difficulty,
        seed: u64,
        store: S,
        grid: Grid,
        current: Piece,
        next: Piece,
    ) -> Self {
        Self::assemble(
            difficulty,
            PieceGenerator::new(seed),
            store,
            grid,
            current,
            next,
        )
    }

    fn assemble(
        difficulty: Difficulty,
        generator: PieceGenerator,
        store: S,
        grid: Grid,
        current: Piece,
        next: Piece,
    ) -> Self {
        let mut engine = Self {
            grid,
            current,
            next,
            generator,
            difficulty,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            fall_time_ms: 0,
            game_over: false,
            new_high_score: false,
            store,
        };
        if !piece_fits(&engine.grid, &engine.current) {
            engine.end_game();
        }
        engine
    }

    pub fn phase(&self) -> EnginePhase {
        if self.game_over {
            EnginePhase::GameOver
        } else {
            EnginePhase::Playing
        }
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn new_high_score(&self) -> bool {
        self.new_high_score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this game.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn fall_time_ms(&self) -> u32 {
        self.fall_time_ms
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.difficulty.fall_interval_ms()
    }

    /// Best score on record for this game's difficulty.
    pub fn high_score(&self) -> u32 {
        self.store.best(self.difficulty)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tear the engine down, handing the score store back.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Translate the current piece if the destination fits.
    pub fn move_by(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }
        let candidate = self.current.moved(dx, dy);
        if piece_fits(&self.grid, &candidate) {
            self.current = candidate;
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.move_by(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_by(1, 0)
    }

    /// One manual row down. Never locks.
    pub fn soft_drop(&mut self) -> bool {
        self.move_by(0, 1)
    }

    /// Rotate clockwise in place, or leave the piece untouched if the rotated
    /// shape does not fit at the same anchor.
    pub fn rotate_current(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let candidate = self.current.with_shape(self.current.shape.rotated());
        if piece_fits(&self.grid, &candidate) {
            self.current = candidate;
            true
        } else {
            false
        }
    }

    /// Drop to the lowest fitting row and lock, exactly once.
    pub fn hard_drop(&mut self) -> LockOutcome {
        if self.game_over {
            return LockOutcome::default();
        }
        while self.move_by(0, 1) {}
        self.lock()
    }

    /// Advance the fall clock.
    ///
    /// Once the accumulated time reaches the fall interval the piece tries to move
    /// down a row, locking if it cannot, and the accumulator goes back to zero.
    /// Returns true if a descent or lock happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }
        self.fall_time_ms = self.fall_time_ms.saturating_add(elapsed_ms);
        if self.fall_time_ms < self.fall_interval_ms() {
            return false;
        }

        if !self.move_by(0, 1) {
            self.lock();
        }
        self.fall_time_ms = 0;
        true
    }

    /// Commit the current piece into the grid.
    ///
    /// A piece with any cell above the top row ends the game without touching the
    /// grid. Otherwise its cells are written, full rows are cleared and scored,
    /// `next` is promoted and a new `next` is spawned; if the promoted piece does
    /// not fit, the game is over.
    pub fn lock(&mut self) -> LockOutcome {
        if self.game_over {
            return LockOutcome::default();
        }

        let piece = self.current;
        if piece.cells().any(|(_, y)| y < 0) {
            self.end_game();
            return LockOutcome {
                locked: true,
                game_over: true,
                ..LockOutcome::default()
            };
        }

        for (x, y) in piece.cells() {
            self.grid.set_cell(x, y, piece.color);
        }
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let lines_cleared = self.clear_lines();
        let points = line_clear_score(lines_cleared);
        self.score = self.score.saturating_add(points);
        if lines_cleared > 0 {
            debug!(lines_cleared, points, score = self.score, "rows cleared");
        }

        self.current = self.next;
        self.next = self.generator.spawn();
        if !piece_fits(&self.grid, &self.current) {
            self.end_game();
        }

        LockOutcome {
            locked: true,
            lines_cleared,
            points,
            game_over: self.game_over,
        }
    }

    fn clear_lines(&mut self) -> u32 {
        let full = self.grid.full_rows();
        let cleared = self.grid.clear_rows(&full) as u32;
        self.lines = self.lines.saturating_add(cleared);
        cleared
    }

    fn end_game(&mut self) {
        self.game_over = true;
        self.new_high_score = self.store.record(self.difficulty, self.score);
        info!(
            difficulty = self.difficulty.as_str(),
            score = self.score,
            lines = self.lines,
            new_high_score = self.new_high_score,
            "game over"
        );
    }

    /// Apply a gameplay command. Session commands are not handled here.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => self.soft_drop(),
            Command::RotateCw => self.rotate_current(),
            Command::HardDrop => self.hard_drop().locked,
            Command::Restart
            | Command::ReturnToMenu
            | Command::Quit
            | Command::SelectDifficulty(_) => false,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u8_grid(&mut out.board);
        out.current = PieceSnapshot::from(self.current);
        out.next = PieceSnapshot::from(self.next);
        out.score = self.score;
        out.high_score = self.high_score();
        out.difficulty = self.difficulty;
        out.lines = self.lines;
        out.game_over = self.game_over;
        out.new_high_score = self.new_high_score;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
