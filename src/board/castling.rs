//! Castling by king-to-rook square pairs.
//!
//! Castling rights are not tracked: legality is derived from the current
//! occupancy and attack status only, and the square the king passes over is
//! not tested.

use super::{CastlingError, Color, GameState, Piece, Square};

/// Geometry of one castling move, in columns of the mover's back row.
struct CastleLayout {
    rook_col: usize,
    between: &'static [usize],
    king_to: usize,
    rook_to: usize,
}

const KINGSIDE: CastleLayout = CastleLayout {
    rook_col: 7,
    between: &[5, 6],
    king_to: 6,
    rook_to: 5,
};

const QUEENSIDE: CastleLayout = CastleLayout {
    rook_col: 0,
    between: &[1, 2, 3],
    king_to: 2,
    rook_to: 3,
};

const KING_COL: usize = 4;

fn layout_for(mover: Color, from: Square, to: Square) -> Option<&'static CastleLayout> {
    let row = mover.back_row();
    if from != Square(row, KING_COL) || to.row() != row {
        return None;
    }
    [&KINGSIDE, &QUEENSIDE]
        .into_iter()
        .find(|layout| layout.rook_col == to.col())
}

impl GameState {
    /// True if `from`/`to` is one of the mover's two king-to-rook pairs
    #[must_use]
    pub fn is_castling_pair(&self, from: Square, to: Square) -> bool {
        layout_for(self.side_to_move(), from, to).is_some()
    }

    /// Castle the side to move, given the king's home square and a rook's home square.
    ///
    /// On success the king lands two squares toward the rook and the rook on the
    /// square it passed, both recorded in history, and the turn passes once.
    pub fn handle_castling(&mut self, from: Square, to: Square) -> Result<(), CastlingError> {
        let mover = self.side_to_move();
        let layout = layout_for(mover, from, to).ok_or(CastlingError::NotCastlingPair)?;
        let row = mover.back_row();

        if self.board.piece_at(from) != Some((mover, Piece::King))
            || self.board.piece_at(to) != Some((mover, Piece::Rook))
        {
            return Err(self.reject(CastlingError::MissingPieces));
        }
        if self.checks_and_pins().in_check() {
            return Err(self.reject(CastlingError::InCheck));
        }
        if layout
            .between
            .iter()
            .any(|&col| !self.board.is_empty(Square(row, col)))
        {
            return Err(self.reject(CastlingError::PathBlocked));
        }
        let king_to = Square(row, layout.king_to);
        if self.square_under_attack(king_to) {
            return Err(self.reject(CastlingError::DestinationAttacked));
        }

        let king_move = self.board.create_move(from, king_to, (mover, Piece::King));
        let rook_move = self
            .board
            .create_move(to, Square(row, layout.rook_to), (mover, Piece::Rook));
        self.make_castling(&king_move, &rook_move);
        crate::engine_debug!("{mover} castled {king_move} / {rook_move}");
        self.refresh_status();
        Ok(())
    }

    fn reject(&self, err: CastlingError) -> CastlingError {
        crate::engine_debug!("castling refused for {}: {err}", self.side_to_move());
        err
    }
}
