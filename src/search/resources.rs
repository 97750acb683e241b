//! Resource tracking for solve calls.
//!
//! A solve call runs to completion with no suspension points, so an embedding
//! caller bounds worst-case latency through explicit budgets:
//! - counter-based limits ([`SearchLimits`])
//! - `try_reserve` wrappers that surface allocation failure as [`SearchError`]
//!
//! Budgets are approximate but correlate strongly with memory use. Hitting a
//! limit is an error outcome, distinct from exhausting the frontier (which is
//! a normal result).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy)]
/// Search budgets used to bound memory/time consumption.
///
/// - `max_states`: configurations admitted to the visited set
/// - `max_edges`: generated successor boards
/// - `max_runtime_steps`: generic loop-iteration guard
pub struct SearchLimits {
    pub max_states: usize,
    pub max_edges: usize,
    pub max_runtime_steps: u64,
}

impl Default for SearchLimits {
    /// Defaults admit a full exhaust of the 181 440-state solvable component,
    /// so an unsolvable input still terminates with a normal "no solution"
    /// result rather than a limit error.
    fn default() -> Self {
        Self {
            max_states: 400_000,
            max_edges: 2_000_000,
            max_runtime_steps: 10_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Running counters tracked during a solve call.
pub struct SearchCounts {
    pub states: u64,
    pub edges: u64,
    pub runtime_steps: u64,
}

#[derive(Debug)]
/// Structured errors returned by solve routines.
pub enum SearchError {
    /// A configured resource limit was exceeded.
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: SearchCounts,
    },
    /// A `try_reserve` allocation failed for a large structure.
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
        counts: SearchCounts,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts,
            } => write!(
                f,
                "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
                 counts(states={}, edges={}, runtime_steps={})",
                counts.states, counts.edges, counts.runtime_steps
            ),
            SearchError::AllocationFailed {
                stage,
                structure,
                counts,
            } => write!(
                f,
                "allocation failed at {stage} for {structure}; \
                 counts(states={}, edges={}, runtime_steps={})",
                counts.states, counts.edges, counts.runtime_steps
            ),
        }
    }
}

impl std::error::Error for SearchError {}

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a solve call.
pub struct ResourceTracker {
    limits: SearchLimits,
    counts: SearchCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            counts: SearchCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> SearchCounts {
        self.counts
    }

    #[inline]
    pub fn bump_states(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(
            stage,
            "states",
            delta as u64,
            self.limits.max_states as u64,
            |c| &mut c.states,
        )
    }

    #[inline]
    pub fn bump_edges(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(
            stage,
            "edges",
            delta as u64,
            self.limits.max_edges as u64,
            |c| &mut c.edges,
        )
    }

    #[inline]
    pub fn bump_steps(&mut self, stage: &'static str, delta: u64) -> Result<(), SearchError> {
        self.bump(
            stage,
            "runtime_steps",
            delta,
            self.limits.max_runtime_steps,
            |c| &mut c.runtime_steps,
        )
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut SearchCounts) -> &mut u64,
    ) -> Result<(), SearchError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            return Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts,
            });
        }

        Ok(())
    }

    pub fn try_reserve_set<K>(
        &self,
        stage: &'static str,
        structure: &'static str,
        set: &mut rustc_hash::FxHashSet<K>,
        additional: usize,
    ) -> Result<(), SearchError>
    where
        K: std::hash::Hash + Eq,
    {
        set.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }
}
