//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` and `Direction` - (row, col) coordinates and unit steps
//! - `Board` - the 8×8 piece grid
//! - `Move` and `MoveList` - move representation

mod grid;
mod moves;
mod piece;
mod square;

pub use grid::Board;
pub use moves::{parse_square_pair, Move, MoveList};
pub use piece::{piece_code, Color, Piece};
pub use square::{Direction, Square};
