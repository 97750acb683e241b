//! The 3×3 sliding-tile board.
//!
//! A board is a permutation of `0..=8` laid out row-major; `0` is the blank.
//! Boards are immutable values: [`Board::apply`] returns a fresh board and
//! leaves the receiver untouched. Identity (equality / hashing) is defined by
//! the tile sequence alone, which is what lets the solver deduplicate states
//! reached through different move orders.

use std::fmt;
use std::hash::{Hash, Hasher};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Grid side length. The crate is fixed to 3×3; see the design notes.
pub const SIDE: usize = 3;
/// Number of cells (and tile values, counting the blank).
pub const TILE_COUNT: usize = SIDE * SIDE;

/// The solved tile sequence.
pub const GOAL_TILES: [u8; TILE_COUNT] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// A blank move: the blank swaps with the adjacent tile in this direction.
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed expansion order used by move generation.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Parse the lowercase names used by the drivers.
    pub fn parse(s: &str) -> Option<Direction> {
        match s {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors from board construction.
pub enum BoardError {
    /// The supplied tiles are not exactly the multiset {0..8}.
    InvalidPermutation { reason: String },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidPermutation { reason } => {
                write!(f, "invalid permutation: {reason}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// An immutable board configuration with a cached blank index.
///
/// `blank` is fully determined by `tiles`, so identity is defined on the tile
/// sequence alone.
#[derive(Debug, Clone, Copy)]
pub struct Board {
    tiles: [u8; TILE_COUNT],
    blank: u8,
}

impl PartialEq for Board {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl Board {
    /// Build a board from an explicit tile sequence.
    ///
    /// Accepts exactly the permutations of `0..=8`; anything else is rejected
    /// with [`BoardError::InvalidPermutation`] before any solving attempt.
    pub fn from_tiles(tiles: [u8; TILE_COUNT]) -> Result<Board, BoardError> {
        let mut seen = [false; TILE_COUNT];
        for &v in tiles.iter() {
            let idx = v as usize;
            if idx >= TILE_COUNT {
                return Err(BoardError::InvalidPermutation {
                    reason: format!("tile value {v} is out of range 0..=8"),
                });
            }
            if seen[idx] {
                return Err(BoardError::InvalidPermutation {
                    reason: format!("tile value {v} appears more than once"),
                });
            }
            seen[idx] = true;
        }

        Ok(Board::from_tiles_unchecked(tiles))
    }

    /// The solved board.
    #[inline]
    pub fn goal() -> Board {
        Board::from_tiles_unchecked(GOAL_TILES)
    }

    /// Generate a uniformly random *solvable* board using the thread RNG.
    pub fn random() -> Board {
        Board::random_with(&mut rand::thread_rng())
    }

    /// Generate a uniformly random solvable board with the given RNG.
    ///
    /// Rejection sampling: shuffle until the inversion parity admits a
    /// solution. Half of all permutations are solvable, so the expected
    /// number of shuffles is 2.
    pub fn random_with<R: Rng>(rng: &mut R) -> Board {
        let mut tiles = GOAL_TILES;
        loop {
            tiles.shuffle(rng);
            let board = Board::from_tiles_unchecked(tiles);
            if board.is_solvable() {
                return board;
            }
        }
    }

    /// Scramble the goal board by applying `moves` random legal moves.
    ///
    /// Solvable by construction, and the optimal solution has at most `moves`
    /// steps. Unlike [`Board::random_with`] this never rejects.
    pub fn scrambled_with<R: Rng>(rng: &mut R, moves: usize) -> Board {
        let mut board = Board::goal();
        for _ in 0..moves {
            let mut legal = [Direction::Up; 4];
            let mut n = 0;
            for dir in Direction::ALL {
                if board.apply(dir).is_some() {
                    legal[n] = dir;
                    n += 1;
                }
            }
            let dir = legal[rng.gen_range(0..n)];
            board = board.apply(dir).expect("chosen direction is legal");
        }
        board
    }

    fn from_tiles_unchecked(tiles: [u8; TILE_COUNT]) -> Board {
        let blank = tiles
            .iter()
            .position(|&v| v == 0)
            .expect("a permutation of 0..=8 contains the blank") as u8;
        Board { tiles, blank }
    }

    #[inline]
    pub fn tiles(&self) -> &[u8; TILE_COUNT] {
        &self.tiles
    }

    /// Index of the blank cell (row-major).
    #[inline]
    pub fn blank(&self) -> usize {
        self.blank as usize
    }

    /// Apply one blank move, returning the successor board.
    ///
    /// Returns `None` when the move would leave the grid; the board itself is
    /// never modified.
    pub fn apply(&self, dir: Direction) -> Option<Board> {
        let blank = self.blank as usize;
        let (row, col) = (blank / SIDE, blank % SIDE);

        let target = match dir {
            Direction::Up if row > 0 => blank - SIDE,
            Direction::Down if row < SIDE - 1 => blank + SIDE,
            Direction::Left if col > 0 => blank - 1,
            Direction::Right if col < SIDE - 1 => blank + 1,
            _ => return None,
        };

        let mut tiles = self.tiles;
        tiles.swap(blank, target);
        Some(Board {
            tiles,
            blank: target as u8,
        })
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        self.tiles == GOAL_TILES
    }

    /// Inversion-parity solvability test.
    ///
    /// Counts pairs `i < j` with `tiles[i] > tiles[j] > 0`; an even count
    /// means solvable. Every legal move preserves this parity, so the solver
    /// only checks externally supplied boards, never derived ones.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }

    fn inversions(&self) -> usize {
        let mut count = 0;
        for i in 0..TILE_COUNT {
            if self.tiles[i] == 0 {
                continue;
            }
            for j in (i + 1)..TILE_COUNT {
                if self.tiles[j] != 0 && self.tiles[j] < self.tiles[i] {
                    count += 1;
                }
            }
        }
        count
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(SIDE) {
            for &v in row {
                if v == 0 {
                    write!(f, " . ")?;
                } else {
                    write!(f, " {v} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
