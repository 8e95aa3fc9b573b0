//! The 8×8 piece grid.

use std::fmt;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{piece_code, Color, Piece};
use super::square::Square;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8×8 grid of optional pieces, indexed by [`Square`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    cells: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// A board with no pieces on it
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard starting position
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (col, &piece) in BACK_RANK.iter().enumerate() {
            board.cells[Color::Black.back_row()][col] = Some((Color::Black, piece));
            board.cells[Color::Black.pawn_start_row()][col] = Some((Color::Black, Piece::Pawn));
            board.cells[Color::White.pawn_start_row()][col] = Some((Color::White, Piece::Pawn));
            board.cells[Color::White.back_row()][col] = Some((Color::White, piece));
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.cells[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.0][sq.1].is_none()
    }

    /// Just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    pub(crate) fn set(&mut self, sq: Square, cell: Option<(Color, Piece)>) {
        self.cells[sq.0][sq.1] = cell;
    }

    /// Iterate over every occupied square with its piece
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|(color, piece)| (Square(row, col), color, piece)))
        })
    }

    /// Locate the first king of `color`, scanning from a8
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl Index<Square> for Board {
    type Output = Option<(Color, Piece)>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.cells[sq.0][sq.1]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.cells[sq.0][sq.1]
    }
}

/// Renders rows top (rank 8) to bottom with two-character piece codes.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                write!(f, " {}", piece_code(*cell))?;
            }
            writeln!(f)?;
        }
        write!(f, "   a  b  c  d  e  f  g  h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let board = Board::standard();
        assert_eq!(board.piece_at(Square(7, 4)), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(Square(0, 3)), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.piece_at(Square(6, 0)), Some((Color::White, Piece::Pawn)));
        assert!(board.is_empty(Square(4, 4)));
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn test_find_king() {
        let board = Board::standard();
        assert_eq!(board.find_king(Color::White), Some(Square(7, 4)));
        assert_eq!(board.find_king(Color::Black), Some(Square(0, 4)));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn test_render_uses_piece_codes() {
        let text = Board::standard().to_string();
        let first = text.lines().next().unwrap_or_default();
        assert_eq!(first, "8  bR bN bB bQ bK bB bN bR");
        assert!(text.contains("4  -- -- -- -- -- -- -- --"));
    }
}
