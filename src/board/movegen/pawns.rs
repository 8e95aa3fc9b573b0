use super::super::{Board, Color, Direction, MoveList, Piece, Square};

impl Board {
    /// Pushes and diagonal captures; a pinned pawn keeps only steps along its pin axis.
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        color: Color,
        pin: Option<Direction>,
        moves: &mut MoveList,
    ) {
        let allowed = |dir: Direction| pin.map_or(true, |axis| axis.same_axis(dir));
        let forward = Direction(color.pawn_direction(), 0);

        if let Some(one) = from.offset(forward, 1) {
            if self.is_empty(one) && allowed(forward) {
                moves.push(self.create_move(from, one, (color, Piece::Pawn)));
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = from.offset(forward, 2) {
                        if self.is_empty(two) {
                            moves.push(self.create_move(from, two, (color, Piece::Pawn)));
                        }
                    }
                }
            }
        }

        for side in [-1, 1] {
            let dir = Direction(color.pawn_direction(), side);
            if let Some(target) = from.offset(dir, 1) {
                if self.color_on(target) == Some(color.opponent()) && allowed(dir) {
                    moves.push(self.create_move(from, target, (color, Piece::Pawn)));
                }
            }
        }
    }
}
