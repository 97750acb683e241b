//! Serializable solve reports for drivers and golden tests.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Direction};
use crate::search::engine::{Solution, Strategy};
use crate::search::resources::SearchCounts;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub strategy: String,
    /// Row-major start tiles, blank as 0.
    pub start: Vec<u8>,
    pub solved: bool,
    pub plan: Vec<Direction>,
    pub plan_len: usize,
    pub explored: u64,
    pub counts: SearchCounts,
}

impl SolveReport {
    pub fn new(start: &Board, strategy: Strategy, solution: &Solution) -> SolveReport {
        let plan = solution.plan.clone().unwrap_or_default();
        SolveReport {
            strategy: strategy.name().to_string(),
            start: start.tiles().to_vec(),
            solved: solution.plan.is_some(),
            plan_len: plan.len(),
            plan,
            explored: solution.explored,
            counts: solution.counts,
        }
    }
}
