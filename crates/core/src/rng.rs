//! RNG module - uniform random piece generation
//!
//! Every spawn draws a kind uniformly from the seven tetrominoes and, independently,
//! a color uniformly from the seven block colors. There is no bag: repeats and
//! droughts are possible.
//!
//! The generator is seeded so a game can be replayed exactly.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::piece::Piece;
use crate::types::{Color, PieceKind};

/// Seeded source of freshly spawned pieces.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: StdRng,
    seed: u64,
}

impl PieceGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw a kind and color and place the piece at the spawn anchor.
    pub fn spawn(&mut self) -> Piece {
        let kind = self.next_kind();
        let color = self.next_color();
        Piece::spawn(kind, color)
    }

    pub fn next_kind(&mut self) -> PieceKind {
        *PieceKind::ALL
            .choose(&mut self.rng)
            .unwrap_or(&PieceKind::I)
    }

    pub fn next_color(&mut self) -> Color {
        let i = self.rng.gen_range(0..Color::ALL.len());
        Color::ALL[i]
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
