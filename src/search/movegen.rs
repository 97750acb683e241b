//! Successor generation.

use crate::board::{Board, Direction};
use crate::search::resources::{ResourceTracker, SearchError};

/// Generate all legal successors of `board`, trying the four directions in
/// the fixed order of [`Direction::ALL`].
///
/// Yields 2 boards when the blank is in a corner, 3 on an edge, 4 in the
/// center.
pub fn successors(
    board: &Board,
    tracker: &mut ResourceTracker,
) -> Result<Vec<(Direction, Board)>, SearchError> {
    let mut out: Vec<(Direction, Board)> = Vec::with_capacity(4);

    for dir in Direction::ALL {
        if let Some(next) = board.apply(dir) {
            out.push((dir, next));
        }
    }

    tracker.bump_edges("movegen", out.len())?;
    Ok(out)
}
