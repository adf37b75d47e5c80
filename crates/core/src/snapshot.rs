//! Read-only views handed to the renderer.
//!
//! Snapshots are plain `Copy`-friendly data: the view layer never borrows live
//! engine or session state.

use crate::piece::{Piece, Shape};
use crate::score_store::ScoreStore;
use crate::types::{Color, Difficulty, PieceKind, DIFFICULTY_COUNT, GRID_HEIGHT, GRID_WIDTH};

const W: usize = GRID_WIDTH as usize;
const H: usize = GRID_HEIGHT as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl PieceSnapshot {
    /// Occupied cells in absolute grid coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

impl From<Piece> for PieceSnapshot {
    fn from(piece: Piece) -> Self {
        Self {
            kind: piece.kind,
            shape: piece.shape,
            color: piece.color,
            x: piece.x,
            y: piece.y,
        }
    }
}

impl Default for PieceSnapshot {
    fn default() -> Self {
        Piece::spawn(PieceKind::I, Color::ALL[0]).into()
    }
}

/// Everything the play screen draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Locked cells as color indices (0 = empty), row 0 at the top.
    pub board: [[u8; W]; H],
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u32,
    /// Best on record for `difficulty`.
    pub high_score: u32,
    pub difficulty: Difficulty,
    pub lines: u32,
    pub game_over: bool,
    pub new_high_score: bool,
}

impl GameSnapshot {
    pub fn difficulty_label(&self) -> &'static str {
        self.difficulty.label()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; W]; H],
            current: PieceSnapshot::default(),
            next: PieceSnapshot::default(),
            score: 0,
            high_score: 0,
            difficulty: Difficulty::Easy,
            lines: 0,
            game_over: false,
            new_high_score: false,
        }
    }
}

/// One difficulty line of the start menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub difficulty: Difficulty,
    pub best: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSnapshot {
    pub entries: [MenuEntry; DIFFICULTY_COUNT],
}

impl MenuSnapshot {
    pub fn from_store<S: ScoreStore + ?Sized>(store: &S) -> Self {
        Self {
            entries: Difficulty::ALL.map(|difficulty| MenuEntry {
                difficulty,
                best: store.best(difficulty),
            }),
        }
    }
}

/// What the session is showing right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSnapshot {
    Menu(MenuSnapshot),
    /// Active or finished game (see [`GameSnapshot::game_over`]).
    Playing(GameSnapshot),
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score_store::MemoryScoreStore;

    #[test]
    fn test_menu_lists_bests_in_order() {
        let store = MemoryScoreStore::with_bests([100, 0, 300]);
        let menu = MenuSnapshot::from_store(&store);
        assert_eq!(menu.entries[0].difficulty, Difficulty::Easy);
        assert_eq!(menu.entries[0].best, 100);
        assert_eq!(menu.entries[1].best, 0);
        assert_eq!(menu.entries[2].difficulty, Difficulty::Hard);
        assert_eq!(menu.entries[2].best, 300);
    }

    #[test]
    fn test_piece_snapshot_cells() {
        let snap = PieceSnapshot::from(Piece::spawn(PieceKind::O, Color::ALL[3]).at(1, 2));
        let cells: Vec<_> = snap.cells().collect();
        assert_eq!(cells, vec![(1, 2), (2, 2), (1, 3), (2, 3)]);
    }
}
