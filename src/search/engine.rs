//! The solve loop: one frontier discipline, one visited set, one arena.
//!
//! Each call owns an isolated frontier, visited set, and node arena; nothing
//! is shared across invocations. The call runs to completion (goal found,
//! frontier exhausted, or a resource limit hit) before returning.

use rustc_hash::FxHashSet;

use crate::board::{Board, Direction};
use crate::search::arena::Arena;
use crate::search::frontier::Frontier;
use crate::search::heuristic::manhattan;
use crate::search::movegen;
use crate::search::resources::{ResourceTracker, SearchCounts, SearchError, SearchLimits};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Priority key for the best-first frontier.
pub enum CostModel {
    /// Order by heuristic value alone (greedy best-first). This matches the
    /// observed behavior of the system this engine models; no optimality
    /// guarantee.
    #[default]
    Greedy,
    /// Order by path length plus heuristic (admissible A*); the first
    /// solution found is shortest.
    AStar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Frontier discipline for one solve call.
pub enum Strategy {
    /// FIFO frontier; the first solution found has the minimum number of
    /// moves.
    BreadthFirst,
    /// LIFO frontier. With `max_depth` set, popped nodes deeper than the
    /// limit are counted as explored and discarded without expansion.
    DepthFirst { max_depth: Option<u32> },
    /// Min-priority frontier keyed per [`CostModel`], ties broken by
    /// insertion order.
    BestFirst { cost: CostModel },
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth_first",
            Strategy::DepthFirst { .. } => "depth_first",
            Strategy::BestFirst { .. } => "best_first",
        }
    }
}

#[derive(Debug, Clone)]
/// Outcome of a completed solve call.
///
/// `plan` is `None` when the frontier emptied without reaching the goal; that
/// is a normal terminal outcome, not an error. `explored` counts popped
/// nodes, including depth-pruned ones, and is always at least 1.
pub struct Solution {
    pub plan: Option<Vec<Direction>>,
    pub explored: u64,
    pub counts: SearchCounts,
}

/// Search for an action sequence from `start` to the goal board.
///
/// The engine never re-verifies solvability: moves preserve inversion parity,
/// so only externally supplied boards need checking. An unsolvable `start`
/// makes breadth-first and best-first exhaust the full reachable component
/// (within the configured limits) before reporting `plan: None`.
pub fn solve(
    start: &Board,
    strategy: Strategy,
    limits: SearchLimits,
) -> Result<Solution, SearchError> {
    let mut tracker = ResourceTracker::new(limits);
    let mut arena = Arena::new();

    // Only enqueued successors are marked visited; the root configuration
    // itself is not, so a cycle back to the root is enqueued once more on its
    // first recurrence.
    let mut visited: FxHashSet<Board> = FxHashSet::default();

    let root = arena.push_root(*start);
    let mut frontier = match strategy {
        Strategy::BreadthFirst => Frontier::fifo(),
        Strategy::DepthFirst { .. } => Frontier::lifo(),
        Strategy::BestFirst { .. } => Frontier::ordered(),
    };
    frontier.push(root, priority(strategy, start, 0));

    let mut explored: u64 = 0;

    while let Some(id) = frontier.pop() {
        tracker.bump_steps("solve_loop", 1)?;
        explored += 1;

        let (board, depth) = {
            let node = arena.get(id);
            (node.board, node.depth)
        };

        if board.is_goal() {
            return Ok(Solution {
                plan: Some(arena.path_from_root(id)),
                explored,
                counts: tracker.counts(),
            });
        }

        if let Strategy::DepthFirst {
            max_depth: Some(limit),
        } = strategy
        {
            // Prune this branch without terminating the run.
            if depth > limit {
                continue;
            }
        }

        for (dir, next) in movegen::successors(&board, &mut tracker)? {
            if visited.contains(&next) {
                continue;
            }
            tracker.try_reserve_set("solve_expand", "visited", &mut visited, 1)?;
            visited.insert(next);
            tracker.bump_states("solve_expand", 1)?;

            let child = arena.push_child(id, dir, next);
            frontier.push(child, priority(strategy, &next, depth + 1));
        }
    }

    Ok(Solution {
        plan: None,
        explored,
        counts: tracker.counts(),
    })
}

#[inline]
fn priority(strategy: Strategy, board: &Board, depth: u32) -> u32 {
    match strategy {
        Strategy::BestFirst {
            cost: CostModel::Greedy,
        } => manhattan(board),
        Strategy::BestFirst {
            cost: CostModel::AStar,
        } => depth + manhattan(board),
        _ => 0,
    }
}
