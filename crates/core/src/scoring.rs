//! Scoring module - line clear points
//!
//! Clearing `n` rows in one lock awards the triangular bonus `n * 100 * (n + 1) / 2`:
//!
//! | Rows | Points |
//! |------|--------|
//! | 0 | 0 |
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 600 |
//! | 4 | 1000 |
//!
//! Drops earn nothing on their own.

/// Base points per cleared row.
pub const LINE_CLEAR_BASE: u32 = 100;

/// Points for clearing `lines` rows with a single lock.
///
/// `n * (n + 1)` is always even, so the division is exact.
pub fn line_clear_score(lines: u32) -> u32 {
    lines
        .saturating_mul(LINE_CLEAR_BASE)
        .saturating_mul(lines.saturating_add(1))
        / 2
}
