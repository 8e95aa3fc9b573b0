//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::grid::Board;
use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::error::{MoveError, MoveParseError};

/// A single piece relocation, captured against the board it was built from.
///
/// Equality and hashing use only [`Move::id`], i.e. the start and end squares.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) piece_moved: (Color, Piece),
    pub(crate) piece_captured: Option<(Color, Piece)>,
    pub(crate) is_pawn_promotion: bool,
    pub(crate) is_castling: bool,
}

impl Move {
    /// Build a move from `from` to `to`, reading both pieces off `board`.
    ///
    /// Must be called before the board is mutated by this move.
    pub fn new(from: Square, to: Square, board: &Board) -> Result<Self, MoveError> {
        for square in [from, to] {
            if !square.is_valid() {
                return Err(MoveError::InvalidSquare { square });
            }
        }
        let piece_moved = board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        Ok(Move::from_parts(from, to, piece_moved, board.piece_at(to)))
    }

    pub(crate) fn from_parts(
        from: Square,
        to: Square,
        piece_moved: (Color, Piece),
        piece_captured: Option<(Color, Piece)>,
    ) -> Self {
        let (color, piece) = piece_moved;
        Move {
            from,
            to,
            piece_moved,
            piece_captured,
            is_pawn_promotion: piece == Piece::Pawn && to.row() == color.promotion_row(),
            is_castling: false,
        }
    }

    pub(crate) fn castling(self) -> Self {
        Move {
            is_castling: true,
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn piece_moved(&self) -> (Color, Piece) {
        self.piece_moved
    }

    #[inline]
    #[must_use]
    pub const fn piece_captured(&self) -> Option<(Color, Piece)> {
        self.piece_captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn_promotion(&self) -> bool {
        self.is_pawn_promotion
    }

    /// True for both halves of a castling pair
    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        self.is_castling
    }

    /// Ordering key `start_row*1000 + start_col*100 + end_row*10 + end_col`
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u16 {
        (self.from.0 * 1000 + self.from.1 * 100 + self.to.0 * 10 + self.to.1) as u16
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

/// Square-pair notation, e.g. `e2e4`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Parse square-pair notation such as `e2e4` into its two squares.
pub fn parse_square_pair(notation: &str) -> Result<(Square, Square), MoveParseError> {
    let len = notation.chars().count();
    if len != 4 || !notation.is_ascii() {
        return Err(MoveParseError::InvalidLength { len });
    }
    let invalid = |_| MoveParseError::InvalidSquare {
        notation: notation.to_string(),
    };
    let from = notation[..2].parse::<Square>().map_err(invalid)?;
    let to = notation[2..].parse::<Square>().map_err(invalid)?;
    Ok((from, to))
}

/// Growable list of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(32),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }

    pub(crate) fn extend(&mut self, other: MoveList) {
        self.moves.extend(other.moves);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    /// True if a move with the same start and end squares is in the list
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Find the move going from `from` to `to`
    #[must_use]
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.moves
            .iter()
            .find(|m| m.from == from && m.to == to)
            .copied()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
