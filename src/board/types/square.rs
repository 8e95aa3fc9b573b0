//! Square and direction types.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (row, col).
///
/// Row 0 is rank 8 (Black's back rank) and row 7 is rank 1; col 0 is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// True if both coordinates are on the board
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// The square `steps` times `dir` away, or `None` past the edge.
    #[inline]
    #[must_use]
    pub fn offset(self, dir: Direction, steps: isize) -> Option<Square> {
        let row = self.0 as isize + dir.0 * steps;
        let col = self.1 as isize + dir.1 * steps;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "({}, {})", self.0, self.1);
        }
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, 8 - self.0)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 || col >= 8 {
            return Err(SquareError::OutOfBounds { row, col });
        }
        Ok(Square(row, col))
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

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => 8 - (rank as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}

/// A unit step on the board as (row delta, col delta).
///
/// Knight checks reuse this type to carry the knight's offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Direction(pub isize, pub isize);

impl Direction {
    pub const NORTH: Direction = Direction(-1, 0);
    pub const WEST: Direction = Direction(0, -1);
    pub const SOUTH: Direction = Direction(1, 0);
    pub const EAST: Direction = Direction(0, 1);
    pub const NORTH_WEST: Direction = Direction(-1, -1);
    pub const NORTH_EAST: Direction = Direction(-1, 1);
    pub const SOUTH_WEST: Direction = Direction(1, -1);
    pub const SOUTH_EAST: Direction = Direction(1, 1);

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::NORTH,
        Direction::WEST,
        Direction::SOUTH,
        Direction::EAST,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NORTH_WEST,
        Direction::NORTH_EAST,
        Direction::SOUTH_WEST,
        Direction::SOUTH_EAST,
    ];

    /// Orthogonal rays first, then diagonals
    pub const ALL: [Direction; 8] = [
        Direction::NORTH,
        Direction::WEST,
        Direction::SOUTH,
        Direction::EAST,
        Direction::NORTH_WEST,
        Direction::NORTH_EAST,
        Direction::SOUTH_WEST,
        Direction::SOUTH_EAST,
    ];

    pub const KNIGHT: [Direction; 8] = [
        Direction(-2, -1),
        Direction(-2, 1),
        Direction(-1, -2),
        Direction(-1, 2),
        Direction(1, -2),
        Direction(1, 2),
        Direction(2, -1),
        Direction(2, 1),
    ];

    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        self.0 != 0 && self.1 != 0
    }

    /// True if `other` lies on the same line as `self`, in either sense.
    #[inline]
    #[must_use]
    pub fn same_axis(self, other: Direction) -> bool {
        other == self || other == -self
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        Direction(-self.0, -self.1)
    }
}
