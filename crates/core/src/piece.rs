//! Pieces module - tetromino shapes and matrix rotation
//!
//! A shape is a small rectangular boolean matrix. Rotation rebuilds the matrix
//! (no lookup tables, no wall kicks): an R x C input becomes a C x R output with
//! `out[i][j] = in[R-1-j][i]`, a 90° clockwise turn.

use crate::types::{Color, PieceKind, GRID_WIDTH};

/// Largest side of any shape matrix.
pub const MAX_SHAPE_SIZE: usize = 4;

/// Rectangular occupancy matrix stored inline.
///
/// Cells outside `width x height` are always `false`, so derived equality
/// compares only the meaningful part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from rows of 0/1 values (row 0 at the top).
    ///
    /// Every row must have the same length and no side may exceed
    /// [`MAX_SHAPE_SIZE`]; returns `None` otherwise.
    ///
    /// ```
    /// use tui_blocks_core::Shape;
    ///
    /// let t = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
    /// assert_eq!((t.width(), t.height()), (3, 2));
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if height == 0 || width == 0 || height > MAX_SHAPE_SIZE || width > MAX_SHAPE_SIZE {
            return None;
        }
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn is_filled(&self, col: u8, row: u8) -> bool {
        col < self.width && row < self.height && self.cells[row as usize][col as usize]
    }

    /// Occupied cells as (col, row) offsets, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width)
                .filter(move |&col| self.cells[row as usize][col as usize])
                .map(move |col| (col as i8, row as i8))
        })
    }

    /// Rotate 90° clockwise: `out[i][j] = in[R-1-j][i]`.
    pub fn rotated(&self) -> Self {
        let rows = self.height as usize;
        let cols = self.width as usize;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - j][i];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Render as rows of 0/1, mostly for assertions and debugging.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|y| {
                (0..self.width as usize)
                    .map(|x| u8::from(self.cells[y][x]))
                    .collect()
            })
            .collect()
    }
}

/// Canonical spawn matrix for a piece kind.
pub fn spawn_shape(kind: PieceKind) -> Shape {
    const X: bool = true;
    const O: bool = false;
    let (width, height, top, bottom) = match kind {
        PieceKind::I => (4, 1, [X, X, X, X], [O; 4]),
        PieceKind::O => (2, 2, [X, X, O, O], [X, X, O, O]),
        PieceKind::T => (3, 2, [X, X, X, O], [O, X, O, O]),
        PieceKind::L => (3, 2, [X, X, X, O], [X, O, O, O]),
        PieceKind::J => (3, 2, [X, X, X, O], [O, O, X, O]),
        PieceKind::Z => (3, 2, [X, X, O, O], [O, X, X, O]),
        PieceKind::S => (3, 2, [O, X, X, O], [X, X, O, O]),
    };

    let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    cells[0] = top;
    cells[1] = bottom;
    Shape {
        width,
        height,
        cells,
    }
}

/// Spawn column so the shape sits horizontally centered.
pub fn spawn_x(shape: &Shape) -> i8 {
    (GRID_WIDTH / 2) as i8 - (shape.width() / 2) as i8
}

/// A piece: shape, color and the grid position of the shape's top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// New piece in spawn orientation, centered on the top row.
    pub fn spawn(kind: PieceKind, color: Color) -> Self {
        let shape = spawn_shape(kind);
        Self {
            kind,
            shape,
            color,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    /// Same piece placed at an explicit anchor.
    pub fn at(self, x: i8, y: i8) -> Self {
        Self { x, y, ..self }
    }

    /// Candidate translated by (dx, dy).
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Candidate with a replacement shape at the same anchor.
    pub fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..*self }
    }

    /// Occupied cells in absolute grid coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_shapes_have_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(spawn_shape(kind).cells().count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn test_spawn_shapes_match_catalogue() {
        assert_eq!(spawn_shape(PieceKind::I).to_rows(), vec![vec![1, 1, 1, 1]]);
        assert_eq!(spawn_shape(PieceKind::O).to_rows(), vec![vec![1, 1], vec![1, 1]]);
        assert_eq!(
            spawn_shape(PieceKind::T).to_rows(),
            vec![vec![1, 1, 1], vec![0, 1, 0]]
        );
        assert_eq!(
            spawn_shape(PieceKind::L).to_rows(),
            vec![vec![1, 1, 1], vec![1, 0, 0]]
        );
        assert_eq!(
            spawn_shape(PieceKind::J).to_rows(),
            vec![vec![1, 1, 1], vec![0, 0, 1]]
        );
        assert_eq!(
            spawn_shape(PieceKind::Z).to_rows(),
            vec![vec![1, 1, 0], vec![0, 1, 1]]
        );
        assert_eq!(
            spawn_shape(PieceKind::S).to_rows(),
            vec![vec![0, 1, 1], vec![1, 1, 0]]
        );
    }

    #[test]
    fn test_rotation_index_mapping() {
        // 2x3 T becomes 3x2 pointing left.
        let t = spawn_shape(PieceKind::T).rotated();
        assert_eq!(t.to_rows(), vec![vec![0, 1], vec![1, 1], vec![0, 1]]);

        let i = spawn_shape(PieceKind::I).rotated();
        assert_eq!((i.width(), i.height()), (1, 4));
    }

    #[test]
    fn test_spawn_is_centered() {
        assert_eq!(Piece::spawn(PieceKind::I, Color::ALL[0]).x, 3);
        assert_eq!(Piece::spawn(PieceKind::O, Color::ALL[0]).x, 4);
        assert_eq!(Piece::spawn(PieceKind::T, Color::ALL[0]).x, 4);
        assert_eq!(Piece::spawn(PieceKind::T, Color::ALL[0]).y, 0);
    }

    #[test]
    fn test_piece_cells_are_absolute() {
        let piece = Piece::spawn(PieceKind::O, Color::ALL[2]).at(2, 7);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(2, 7), (3, 7), (2, 8), (3, 8)]);
    }
}
