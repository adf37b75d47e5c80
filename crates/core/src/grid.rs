//! Grid module - the well's locked cells
//!
//! The grid is a 10x20 matrix where each cell is empty or holds the color of a
//! locked block. Storage is a fixed array of fixed-width rows, so a row can never
//! be jagged, not even while rows are being cleared.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{cell_to_u8, Cell, Color, GRID_HEIGHT, GRID_WIDTH};

const W: usize = GRID_WIDTH as usize;
const H: usize = GRID_HEIGHT as usize;

/// One row of the well.
pub type Row = [Cell; W];

/// The well - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: [Row; H],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            rows: [[None; W]; H],
        }
    }

    /// Build a grid from explicit rows (row 0 is the top).
    ///
    /// Missing rows at the top are filled with empty rows, so callers can describe
    /// just the bottom of the well. Extra rows beyond the well height are dropped
    /// from the top.
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut grid = Self::new();
        let skip = rows.len().saturating_sub(H);
        let rows = &rows[skip..];
        let offset = H - rows.len();
        for (i, row) in rows.iter().enumerate() {
            grid.rows[offset + i] = *row;
        }
        grid
    }

    #[inline(always)]
    fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && (x as usize) < W && y >= 0 && (y as usize) < H
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        if Self::in_bounds(x, y) {
            Some(self.rows[y as usize][x as usize])
        } else {
            None
        }
    }

    /// True if (x, y) is inside the well and holds no block.
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Write a locked color into a cell.
    ///
    /// Returns false (and writes nothing) when out of bounds. Rows above the top
    /// (`y < 0`) are not storable; the lock step treats them as game over before
    /// ever calling this.
    pub fn set_cell(&mut self, x: i8, y: i8, color: Color) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = Some(color);
        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        match self.rows.get(y) {
            Some(row) => row.iter().all(|cell| cell.is_some()),
            None => false,
        }
    }

    /// Indices of every full row, top to bottom.
    pub fn full_rows(&self) -> ArrayVec<usize, H> {
        (0..H).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove the given rows and insert as many empty rows at the top.
    ///
    /// Surviving rows keep their relative order. The scan runs bottom to top with a
    /// separate write cursor, so every index refers to the grid as it was before
    /// the call no matter how many rows go. Out of range and duplicate indices are
    /// ignored. Returns the number of rows removed.
    pub fn clear_rows(&mut self, indices: &[usize]) -> usize {
        let mut remove = [false; H];
        for &y in indices {
            if y < H {
                remove[y] = true;
            }
        }

        let mut write_y = H;
        for read_y in (0..H).rev() {
            if remove[read_y] {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                self.rows[write_y] = self.rows[read_y];
            }
        }

        for row in &mut self.rows[..write_y] {
            *row = [None; W];
        }

        write_y
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Number of locked cells in the whole grid.
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|c| c.is_some()).count())
            .sum()
    }

    /// Encode the grid into a color-index matrix (0 = empty).
    pub fn write_u8_grid(&self, out: &mut [[u8; W]; H]) {
        for (dst, src) in out.iter_mut().zip(self.rows.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d = cell_to_u8(*s);
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
