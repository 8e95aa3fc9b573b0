//! Fluent builder for constructing game positions.
//!
//! Allows creating positions piece by piece, for tests and tools that need a
//! position other than the standard start.
//!
//! # Example
//! ```
//! use chess_rules::board::{GameStateBuilder, Color, Piece, Square};
//!
//! let state = GameStateBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::Queen)
//!     .piece(Square(0, 0), Color::Black, Piece::King)
//!     .side_to_move(Color::White)
//!     .build();
//! assert!(state.in_check());
//! ```

use super::{Board, Color, GameState, Piece, Square};

/// A fluent builder for constructing `GameState` positions.
///
/// The engine assumes one king per color; the builder does not enforce it.
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    board: Board,
    side_to_move: Color,
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        GameStateBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameStateBuilder {
            board: Board::standard(),
            side_to_move: Color::White,
        }
    }

    /// Place a piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set(square, Some((color, piece)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set(square, None);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the game state with empty history and fresh status flags.
    #[must_use]
    pub fn build(self) -> GameState {
        GameState::from_board(self.board, self.side_to_move == Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = GameStateBuilder::starting_position().build();
        let standard = GameState::new();
        assert_eq!(built.board(), standard.board());
        assert!(built.white_to_move());
    }

    #[test]
    fn test_kings_are_located() {
        let state = GameStateBuilder::new()
            .piece(Square(4, 4), Color::White, Piece::King)
            .piece(Square(0, 7), Color::Black, Piece::King)
            .build();
        assert_eq!(state.king_square(Color::White), Square(4, 4));
        assert_eq!(state.king_square(Color::Black), Square(0, 7));
    }

    #[test]
    fn test_side_to_move() {
        let state = GameStateBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(0, 4), Color::Black, Piece::King)
            .side_to_move(Color::Black)
            .build();
        assert!(!state.white_to_move());
        assert_eq!(state.side_to_move(), Color::Black);
    }

    #[test]
    fn test_clear_square() {
        let state = GameStateBuilder::starting_position()
            .clear(Square(7, 0))
            .build();
        assert!(state.board().piece_at(Square(7, 0)).is_none());
        assert!(state.board().piece_at(Square(7, 1)).is_some());
    }

    #[test]
    fn test_status_computed_on_build() {
        let state = GameStateBuilder::new()
            .piece(Square(0, 7), Color::Black, Piece::King)
            .piece(Square(1, 5), Color::White, Piece::Queen)
            .piece(Square(2, 6), Color::White, Piece::King)
            .side_to_move(Color::Black)
            .build();
        assert!(state.is_stalemate());
        assert!(!state.is_checkmate());
    }
}
