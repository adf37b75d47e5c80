//! Score store capability
//!
//! The engine never touches persistent state directly. It is handed something that
//! implements [`ScoreStore`] and only ever asks two questions of it: what is the best
//! score for a difficulty, and does this finished score beat it.

use crate::types::{Difficulty, DIFFICULTY_COUNT};

/// Per-difficulty best score keeper.
pub trait ScoreStore {
    /// Current best for `difficulty` (0 when nothing was recorded).
    fn best(&self, difficulty: Difficulty) -> u32;

    /// Offer a finished game's score.
    ///
    /// Returns true iff `score` is strictly greater than the current best, in which
    /// case it becomes the new best. Equal scores are not a new best.
    fn record(&mut self, difficulty: Difficulty, score: u32) -> bool;
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    fn best(&self, difficulty: Difficulty) -> u32 {
        (**self).best(difficulty)
    }

    fn record(&mut self, difficulty: Difficulty, score: u32) -> bool {
        (**self).record(difficulty, score)
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn best(&self, difficulty: Difficulty) -> u32 {
        (**self).best(difficulty)
    }

    fn record(&mut self, difficulty: Difficulty, score: u32) -> bool {
        (**self).record(difficulty, score)
    }
}

/// In-memory store, one slot per difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    best: [u32; DIFFICULTY_COUNT],
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with bests (ordered as [`Difficulty::ALL`]).
    pub fn with_bests(best: [u32; DIFFICULTY_COUNT]) -> Self {
        Self { best }
    }

    pub fn bests(&self) -> [u32; DIFFICULTY_COUNT] {
        self.best
    }
}

impl ScoreStore for MemoryScoreStore {
    fn best(&self, difficulty: Difficulty) -> u32 {
        self.best[difficulty.index()]
    }

    fn record(&mut self, difficulty: Difficulty, score: u32) -> bool {
        let slot = &mut self.best[difficulty.index()];
        if score > *slot {
            *slot = score;
            true
        } else {
            false
        }
    }
}

/// Stand-in for "no store attached": best is always 0 and nothing is ever a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoScoreStore;

impl ScoreStore for NoScoreStore {
    fn best(&self, _difficulty: Difficulty) -> u32 {
        0
    }

    fn record(&mut self, _difficulty: Difficulty, _score: u32) -> bool {
        false
    }
}
