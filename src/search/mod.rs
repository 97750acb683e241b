//! State-space search over sliding-tile boards.

pub mod arena;
pub mod engine;
pub mod frontier;
pub mod heuristic;
pub mod movegen;
pub mod report;
pub mod resources;
