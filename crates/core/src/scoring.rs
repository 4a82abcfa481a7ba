//! Scoring module - flat points per cleared row
//!
//! There are no levels, combos or drop bonuses: a lock that clears `n` rows
//! is worth `n * POINTS_PER_LINE`.

use crate::types::POINTS_PER_LINE;

/// Points for clearing `lines` rows with a single lock
pub fn line_clear_score(lines: usize) -> u32 {
    (lines as u32).saturating_mul(POINTS_PER_LINE)
}
