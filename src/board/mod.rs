//! Chess board representation and rules.
//!
//! An 8×8 grid with square-pair moves, pin/check-aware legal move
//! generation, apply/undo, castling, and checkmate/stalemate detection.
//!
//! # Example
//! ```
//! use chess_rules::board::{GameState, Square};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.legal_moves().len(), 20);
//!
//! let moves = game.legal_moves_from(Square(6, 4)); // e2 pawn
//! assert_eq!(moves.len(), 2);
//! game.apply_move(&moves[0]).unwrap();
//! assert!(!game.white_to_move());
//! ```

mod attacks;
mod builder;
mod castling;
mod error;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use attacks::{scan, Check, CheckInfo, Pin};
pub use builder::GameStateBuilder;
pub use error::{CastlingError, MoveError, MoveParseError, SquareError};
pub use state::GameState;
pub use types::{parse_square_pair, piece_code, Board, Color, Direction, Move, MoveList, Piece, Square};
