use super::super::attacks::scan;
use super::super::{Board, Color, Direction, MoveList, Piece, Square};

impl Board {
    /// One-step king moves onto squares that would not be attacked.
    ///
    /// Each target is probed by scanning from it as a hypothetical king square;
    /// the king's current square is transparent to that scan.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for dir in Direction::ALL {
            let Some(to) = from.offset(dir, 1) else {
                continue;
            };
            if self.color_on(to) == Some(color) {
                continue;
            }
            if !scan(self, to, color).in_check() {
                moves.push(self.create_move(from, to, (color, Piece::King)));
            }
        }
    }
}
