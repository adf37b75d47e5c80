//! Collision rules - can a shape occupy a given anchor?
//!
//! Pure functions over the grid. Cells above the top row (`y < 0`) only have to be
//! within the side walls; this is what lets a piece spawn partly above the well.

use crate::grid::Grid;
use crate::piece::{Piece, Shape};
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// True if every occupied cell of `shape` anchored at (x, y) is inside the side
/// walls, above the floor, and (when on the visible grid) over an empty cell.
pub fn fits(grid: &Grid, shape: &Shape, x: i8, y: i8) -> bool {
    shape.cells().all(|(dx, dy)| {
        let ax = x + dx;
        let ay = y + dy;
        if ax < 0 || ax >= GRID_WIDTH as i8 || ay >= GRID_HEIGHT as i8 {
            return false;
        }
        ay < 0 || grid.is_empty_at(ax, ay)
    })
}

/// [`fits`] for a whole piece at its own anchor.
pub fn piece_fits(grid: &Grid, piece: &Piece) -> bool {
    fits(grid, &piece.shape, piece.x, piece.y)
}
