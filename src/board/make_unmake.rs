use super::types::parse_square_pair;
use super::{GameState, Move, MoveError, Piece};

impl GameState {
    /// Put the moved piece on its destination and record the move.
    ///
    /// Promotion always yields a queen of the mover's color.
    fn place(&mut self, m: &Move) {
        let (color, piece) = m.piece_moved;
        self.board[m.from] = None;
        self.board[m.to] = Some(m.piece_moved);
        if piece == Piece::King {
            self.set_king_square(color, m.to);
        }
        if m.is_pawn_promotion {
            self.board[m.to] = Some((color, Piece::Queen));
        }
        self.move_history.push(*m);
    }

    fn revert(&mut self, m: &Move) {
        let (color, piece) = m.piece_moved;
        self.board[m.from] = Some(m.piece_moved);
        self.board[m.to] = m.piece_captured;
        if piece == Piece::King {
            self.set_king_square(color, m.from);
        }
    }

    /// Apply without validation or status refresh.
    pub(crate) fn make_move(&mut self, m: &Move) {
        self.place(m);
        self.white_to_move = !self.white_to_move;
    }

    /// Apply a castling pair (king move first) as a single turn.
    pub(crate) fn make_castling(&mut self, king_move: &Move, rook_move: &Move) {
        self.place(&king_move.castling());
        self.place(&rook_move.castling());
        self.white_to_move = !self.white_to_move;
    }

    /// Revert the last turn without status refresh. A castling pair is reverted together.
    pub(crate) fn unmake_move(&mut self) -> Option<Move> {
        let last = self.move_history.pop()?;
        self.revert(&last);
        let undone = if last.is_castling {
            match self.move_history.pop() {
                Some(king_move) => {
                    self.revert(&king_move);
                    king_move
                }
                None => last,
            }
        } else {
            last
        };
        self.white_to_move = !self.white_to_move;
        Some(undone)
    }

    /// Apply a move produced by the generator.
    ///
    /// Legality is the caller's responsibility; the move is only checked
    /// against the board it was built from. Castling halves are refused here
    /// and must go through [`GameState::handle_castling`].
    pub fn apply_move(&mut self, m: &Move) -> Result<(), MoveError> {
        for square in [m.from, m.to] {
            if !square.is_valid() {
                return Err(MoveError::InvalidSquare { square });
            }
        }
        if m.is_castling {
            return Err(MoveError::IllegalMove {
                notation: m.to_string(),
            });
        }
        if self.board.piece_at(m.from) != Some(m.piece_moved) {
            return Err(MoveError::EmptySquare { square: m.from });
        }
        if self.board.piece_at(m.to) != m.piece_captured {
            return Err(MoveError::StaleMove {
                notation: m.to_string(),
            });
        }

        self.make_move(m);
        crate::engine_debug!(
            "applied {m}{}",
            if m.is_pawn_promotion { " (promoted to queen)" } else { "" }
        );
        self.refresh_status();
        Ok(())
    }

    /// Revert the last turn. Returns `None` (and changes nothing) on empty history.
    ///
    /// For a castling turn the king move is returned.
    pub fn undo_move(&mut self) -> Option<Move> {
        let undone = self.unmake_move()?;
        crate::engine_debug!("undid {undone}");
        self.refresh_status();
        Some(undone)
    }

    /// Play a square-pair move such as `"e2e4"` if it is legal.
    ///
    /// A king-to-rook pair on the mover's back rank (`"e1h1"`, `"e8a8"`, ...)
    /// requests castling. Returns the applied move (the king move for castling).
    pub fn play(&mut self, notation: &str) -> Result<Move, MoveError> {
        let (from, to) = parse_square_pair(notation)?;
        let illegal = || MoveError::IllegalMove {
            notation: notation.to_string(),
        };

        if self.is_castling_pair(from, to) {
            self.handle_castling(from, to).map_err(|_| illegal())?;
            return self.last_castling_king_move().ok_or_else(illegal);
        }

        let m = self.legal_moves_from(from).find(from, to).ok_or_else(illegal)?;
        self.apply_move(&m)?;
        Ok(m)
    }

    fn last_castling_king_move(&self) -> Option<Move> {
        let len = self.move_history.len();
        len.checked_sub(2)
            .and_then(|idx| self.move_history.get(idx))
            .copied()
    }
}
