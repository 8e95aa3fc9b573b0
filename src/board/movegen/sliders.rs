use super::super::{Board, Color, Direction, MoveList, Piece, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn piece(self) -> Piece {
        match self {
            SliderType::Bishop => Piece::Bishop,
            SliderType::Rook => Piece::Rook,
            SliderType::Queen => Piece::Queen,
        }
    }

    fn directions(self) -> &'static [Direction] {
        match self {
            SliderType::Bishop => &Direction::DIAGONAL,
            SliderType::Rook => &Direction::ORTHOGONAL,
            SliderType::Queen => &Direction::ALL,
        }
    }
}

impl Board {
    /// Cast rays until the edge, a friendly piece (excluded) or an enemy (captured).
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
        pin: Option<Direction>,
        moves: &mut MoveList,
    ) {
        let moved = (color, slider.piece());
        for &dir in slider.directions() {
            if pin.is_some_and(|axis| !axis.same_axis(dir)) {
                continue;
            }
            for distance in 1..8 {
                let Some(to) = from.offset(dir, distance) else {
                    break;
                };
                match self.color_on(to) {
                    None => moves.push(self.create_move(from, to, moved)),
                    Some(c) if c != color => {
                        moves.push(self.create_move(from, to, moved));
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
}
