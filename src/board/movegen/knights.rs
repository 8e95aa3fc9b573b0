use super::super::{Board, Color, Direction, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_knight_moves(
        &self,
        from: Square,
        color: Color,
        pin: Option<Direction>,
        moves: &mut MoveList,
    ) {
        // a knight never stays on its pin line
        if pin.is_some() {
            return;
        }
        for offset in Direction::KNIGHT {
            if let Some(to) = from.offset(offset, 1) {
                if self.color_on(to) != Some(color) {
                    moves.push(self.create_move(from, to, (color, Piece::Knight)));
                }
            }
        }
    }
}
