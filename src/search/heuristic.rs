//! Manhattan-distance heuristic.

use crate::board::{Board, SIDE};

/// Sum over all tiles v ≠ 0 of the row and column distance between the
/// tile's current cell and its goal cell (index v−1 in the solved sequence).
///
/// Deterministic, non-negative, and zero exactly at the goal.
pub fn manhattan(board: &Board) -> u32 {
    let mut total = 0u32;
    for (idx, &v) in board.tiles().iter().enumerate() {
        if v == 0 {
            continue;
        }
        let goal = (v - 1) as usize;
        let row_dist = (idx / SIDE).abs_diff(goal / SIDE);
        let col_dist = (idx % SIDE).abs_diff(goal % SIDE);
        total += (row_dist + col_dist) as u32;
    }
    total
}
