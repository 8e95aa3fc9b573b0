#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::attacks::CheckInfo;
use super::{Board, Color, Move, Square};

/// Full state of one game: board, side to move, history and status flags.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) white_to_move: bool,
    pub(crate) move_history: Vec<Move>,
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    pub(crate) in_check: bool,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl GameState {
    /// A new game at the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState::from_board(Board::standard(), true)
    }

    /// Wrap an arbitrary board. Kings are located by scanning the grid; a
    /// missing king falls back to its standard home square.
    pub(crate) fn from_board(board: Board, white_to_move: bool) -> Self {
        let white_king = board.find_king(Color::White).unwrap_or(Square(7, 4));
        let black_king = board.find_king(Color::Black).unwrap_or(Square(0, 4));
        let mut state = GameState {
            board,
            white_to_move,
            move_history: Vec::new(),
            white_king,
            black_king,
            in_check: false,
            checkmate: false,
            stalemate: false,
        };
        state.refresh_status();
        state
    }

    /// Replace the whole state with a fresh game
    pub fn reset(&mut self) {
        *self = GameState::new();
        crate::engine_debug!("game reset");
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Every applied move, oldest first. Castling contributes two entries.
    #[must_use]
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    /// The most recently applied move
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    /// Whether the side to move is in check, as of the last state change
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Checkmate or stalemate has been reached
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.stalemate
    }

    pub(crate) fn set_king_square(&mut self, color: Color, sq: Square) {
        match color {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }

    /// Recompute the check and terminal flags from whole-side generation.
    pub(crate) fn refresh_status(&mut self) {
        let info: CheckInfo = self.checks_and_pins();
        let has_move = self.has_legal_move_with(&info);
        self.in_check = info.in_check();
        self.checkmate = self.in_check && !has_move;
        self.stalemate = !self.in_check && !has_move;

        if self.checkmate {
            crate::engine_debug!("checkmate: {} to move has no legal move", self.side_to_move());
        } else if self.stalemate {
            crate::engine_debug!("stalemate: {} to move has no legal move", self.side_to_move());
        } else {
            crate::engine_trace!(
                "status refreshed: {} to move, in_check={}",
                self.side_to_move(),
                self.in_check
            );
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
