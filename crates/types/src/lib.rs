//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, score persistence).
//!
//! # Well Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: horizontally centered, `y = 0`
//!
//! # Difficulty Catalogue
//!
//! | Difficulty | Fall interval | Label |
//! |------------|---------------|-------|
//! | `Easy` | 800ms | "Easy" |
//! | `Medium` | 500ms | "Medium" |
//! | `Hard` | 300ms | "Hard" |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{Color, Command, Difficulty, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
//! assert_eq!(Difficulty::Medium.fall_interval_ms(), 500);
//! assert_eq!(Color::new(0), None);
//! assert_eq!(Command::SelectDifficulty(Difficulty::Easy).as_str(), "selectDifficulty");
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Well width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Well height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Frame pacing interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Number of distinct block colors (indices 1..=7, 0 is empty)
pub const COLOR_COUNT: u8 = 7;

/// A non-empty block color index in `1..=COLOR_COUNT`.
///
/// Index 0 is reserved for "empty" and is never a valid `Color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u8);

impl Color {
    /// All colors in index order.
    pub const ALL: [Color; COLOR_COUNT as usize] = [
        Color(1),
        Color(2),
        Color(3),
        Color(4),
        Color(5),
        Color(6),
        Color(7),
    ];

    /// Build a color from its index, rejecting 0 and anything above [`COLOR_COUNT`].
    ///
    /// ```
    /// use tui_blocks_types::Color;
    ///
    /// assert!(Color::new(1).is_some());
    /// assert!(Color::new(7).is_some());
    /// assert!(Color::new(0).is_none());
    /// assert!(Color::new(8).is_none());
    /// ```
    pub const fn new(index: u8) -> Option<Self> {
        if index >= 1 && index <= COLOR_COUNT {
            Some(Color(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }
}

/// A cell of the well
///
/// - `None`: Empty cell
/// - `Some(Color)`: Locked block of the given color
pub type Cell = Option<Color>;

/// Encode a cell as its color index (0 for empty).
#[inline]
pub fn cell_to_u8(cell: Cell) -> u8 {
    cell.map(Color::index).unwrap_or(0)
}

/// The seven tetromino piece kinds
///
/// Color is chosen independently of the kind when a piece spawns, so the kind
/// only selects the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl PieceKind {
    /// All kinds, in catalogue order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use tui_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::Z => "z",
            PieceKind::S => "s",
        }
    }
}

/// Number of difficulty tiers.
pub const DIFFICULTY_COUNT: usize = 3;

/// Difficulty tiers, each with its own automatic fall interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers in menu order.
    pub const ALL: [Difficulty; DIFFICULTY_COUNT] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Milliseconds between automatic one-row descents.
    pub const fn fall_interval_ms(self) -> u32 {
        match self {
            Difficulty::Easy => 800,
            Difficulty::Medium => 500,
            Difficulty::Hard => 300,
        }
    }

    /// Human readable label for menus and the side panel.
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Stable identifier (used as the persisted score key).
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Position in [`Difficulty::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    /// Parse a difficulty (case-insensitive). Menu digits `1`..`3` are accepted too.
    ///
    /// ```
    /// use tui_blocks_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("2"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_str("insane"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "1" => Some(Difficulty::Easy),
            "medium" | "2" => Some(Difficulty::Medium),
            "hard" | "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Discrete, already-debounced player commands.
///
/// Gameplay commands are consumed by the game engine; menu and session
/// commands are consumed by the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (no scoring bonus)
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Drop piece to the lowest valid row and lock it
    HardDrop,
    /// Start a fresh game at the same difficulty (after game over)
    Restart,
    /// Leave the current game for the difficulty menu
    ReturnToMenu,
    /// Terminate the session
    Quit,
    /// Start a game from the menu
    SelectDifficulty(Difficulty),
}

impl Command {
    /// camelCase name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::RotateCw => "rotateCw",
            Command::HardDrop => "hardDrop",
            Command::Restart => "restart",
            Command::ReturnToMenu => "returnToMenu",
            Command::Quit => "quit",
            Command::SelectDifficulty(_) => "selectDifficulty",
        }
    }

    /// True for commands that act on the falling piece.
    pub fn is_gameplay(&self) -> bool {
        matches!(
            self,
            Command::MoveLeft
                | Command::MoveRight
                | Command::SoftDrop
                | Command::RotateCw
                | Command::HardDrop
        )
    }
}
