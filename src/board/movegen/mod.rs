mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::attacks::{Check, CheckInfo};
use super::{Board, Color, GameState, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn create_move(&self, from: Square, to: Square, moved: (Color, Piece)) -> Move {
        Move::from_parts(from, to, moved, self.piece_at(to))
    }

    /// Pin-aware moves of one piece, before check filtering.
    pub(crate) fn generate_piece_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        info: &CheckInfo,
        moves: &mut MoveList,
    ) {
        let pin = info.pin_on(from);
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, pin, moves),
            Piece::Knight => self.generate_knight_moves(from, color, pin, moves),
            Piece::Bishop => self.generate_slider_moves(from, color, SliderType::Bishop, pin, moves),
            Piece::Rook => self.generate_slider_moves(from, color, SliderType::Rook, pin, moves),
            Piece::Queen => self.generate_slider_moves(from, color, SliderType::Queen, pin, moves),
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }
}

impl GameState {
    /// Legal moves of the piece on `sq` for the side to move.
    ///
    /// Empty for an empty square, an off-board square, or a piece of the side
    /// not to move. Never touches the checkmate/stalemate flags.
    #[must_use]
    pub fn legal_moves_from(&self, sq: Square) -> MoveList {
        let info = self.checks_and_pins();
        self.legal_moves_from_with(sq, &info)
    }

    /// Legal moves of every piece of the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let info = self.checks_and_pins();
        let mut moves = MoveList::new();
        for (sq, color, _) in self.board.pieces() {
            if color == self.side_to_move() {
                moves.extend(self.legal_moves_from_with(sq, &info));
            }
        }
        moves
    }

    /// Whether the side to move has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.has_legal_move_with(&self.checks_and_pins())
    }

    pub(crate) fn has_legal_move_with(&self, info: &CheckInfo) -> bool {
        let mover = self.side_to_move();
        self.board
            .pieces()
            .filter(|&(_, color, _)| color == mover)
            .any(|(sq, _, _)| !self.legal_moves_from_with(sq, info).is_empty())
    }

    fn legal_moves_from_with(&self, sq: Square, info: &CheckInfo) -> MoveList {
        let mut moves = MoveList::new();
        if !sq.is_valid() {
            return moves;
        }
        let mover = self.side_to_move();
        let Some((color, piece)) = self.board.piece_at(sq) else {
            return moves;
        };
        if color != mover {
            return moves;
        }

        if info.is_double_check() {
            // only the king can answer two attackers
            if piece == Piece::King {
                self.board.generate_king_moves(sq, mover, &mut moves);
            }
            return moves;
        }

        self.board
            .generate_piece_moves(sq, mover, piece, info, &mut moves);

        if let Some(check) = info.checks.first() {
            let targets = self.blocking_squares(check);
            moves.retain(|m| m.piece_moved.1 == Piece::King || targets.contains(&m.to));
        }
        moves
    }

    /// Squares where a non-king move resolves `check`: the knight's own square,
    /// or every square from the king out to and including a slider.
    fn blocking_squares(&self, check: &Check) -> Vec<Square> {
        if let Some((_, Piece::Knight)) = self.board.piece_at(check.attacker) {
            return vec![check.attacker];
        }
        let king = self.king_square(self.side_to_move());
        let mut squares = Vec::with_capacity(7);
        for distance in 1..8 {
            let Some(sq) = king.offset(check.direction, distance) else {
                break;
            };
            squares.push(sq);
            if sq == check.attacker {
                break;
            }
        }
        squares
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves.iter() {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move();
        }
        nodes
    }
}
