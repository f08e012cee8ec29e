//! Squares on the padded mailbox grid.
//!
//! The 8x8 board sits inside a 12x12 grid with two rings of off-board cells
//! on every side. Any knight jump or single ray step from a playable square
//! lands inside the array, so scans never bounds-check: they stop when they
//! read the off-board marker.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

pub(crate) const GRID_WIDTH: usize = 12;
pub(crate) const GRID_SIZE: usize = GRID_WIDTH * GRID_WIDTH;
const BORDER: usize = 2;

pub(crate) const NORTH: isize = GRID_WIDTH as isize;
pub(crate) const SOUTH: isize = -NORTH;
pub(crate) const EAST: isize = 1;
pub(crate) const WEST: isize = -1;

pub(crate) const ORTHOGONAL: [isize; 4] = [NORTH, SOUTH, EAST, WEST];
pub(crate) const DIAGONAL: [isize; 4] = [NORTH + EAST, NORTH + WEST, SOUTH + EAST, SOUTH + WEST];
pub(crate) const KING_OFFSETS: [isize; 8] = [
    NORTH,
    SOUTH,
    EAST,
    WEST,
    NORTH + EAST,
    NORTH + WEST,
    SOUTH + EAST,
    SOUTH + WEST,
];
pub(crate) const KNIGHT_OFFSETS: [isize; 8] = [
    2 * NORTH + EAST,
    2 * NORTH + WEST,
    NORTH + 2 * EAST,
    NORTH + 2 * WEST,
    SOUTH + 2 * EAST,
    SOUTH + 2 * WEST,
    2 * SOUTH + EAST,
    2 * SOUTH + WEST,
];

/// One step of `delta` from raw grid index `idx`.
#[inline]
pub(crate) const fn grid_step(idx: usize, delta: isize) -> usize {
    (idx as isize + delta) as usize
}

/// A playable square, stored as its index into the padded grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square::at(0, 0);
    pub const B1: Square = Square::at(0, 1);
    pub const C1: Square = Square::at(0, 2);
    pub const D1: Square = Square::at(0, 3);
    pub const E1: Square = Square::at(0, 4);
    pub const F1: Square = Square::at(0, 5);
    pub const G1: Square = Square::at(0, 6);
    pub const H1: Square = Square::at(0, 7);
    pub const A8: Square = Square::at(7, 0);
    pub const B8: Square = Square::at(7, 1);
    pub const C8: Square = Square::at(7, 2);
    pub const D8: Square = Square::at(7, 3);
    pub const E8: Square = Square::at(7, 4);
    pub const F8: Square = Square::at(7, 5);
    pub const G8: Square = Square::at(7, 6);
    pub const H8: Square = Square::at(7, 7);

    /// Create a new square with bounds checking (rank and file are 0-7)
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square::at(rank, file))
        } else {
            None
        }
    }

    /// Unchecked constructor for coordinates already known to be on the board.
    #[inline]
    pub(crate) const fn at(rank: usize, file: usize) -> Self {
        Square(((rank + BORDER) * GRID_WIDTH + file + BORDER) as u8)
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0 as usize / GRID_WIDTH - BORDER
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0 as usize % GRID_WIDTH - BORDER
    }

    /// Get the square's dense index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.rank() * 8 + self.file()
    }

    /// Create a square from a dense index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square::at(idx / 8, idx % 8))
        } else {
            None
        }
    }

    /// Flip the square vertically (e.g., a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square::at(7 - self.rank(), self.file())
    }

    #[inline]
    pub(crate) const fn grid_index(self) -> usize {
        self.0 as usize
    }

    /// Grid index one step of `delta` away. Always inside the grid, possibly
    /// on the border.
    #[inline]
    pub(crate) const fn offset(self, delta: isize) -> usize {
        grid_step(self.0 as usize, delta)
    }

    /// Convert a raw grid index back to a square if it is playable.
    #[inline]
    pub(crate) const fn from_grid(idx: usize) -> Option<Self> {
        let row = idx / GRID_WIDTH;
        let col = idx % GRID_WIDTH;
        if row >= BORDER && row < BORDER + 8 && col >= BORDER && col < BORDER + 8 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// All 64 squares from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(|idx| Square::at(idx / 8, idx % 8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() as u8 + b'a') as char, self.rank() + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square::at(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let rank = match rank {
            '1'..='8' => rank as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Ok(Square::at(rank, file))
    }
}
