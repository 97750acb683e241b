//! A state-space search engine for the 3×3 sliding-tile puzzle: solvable
//! board generation, legal-move enumeration, and pathfinding to the solved
//! board under three interchangeable frontier disciplines (breadth-first,
//! depth-limited depth-first, heuristic best-first).

pub mod board;
pub mod search;
