//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal moves, pins, single and double checks
//! - `make_unmake.rs` - Apply/undo correctness
//! - `castling.rs` - King-to-rook castling requests
//! - `edge_cases.rs` - Mates, stalemates and scripted games
//! - `perft.rs` - Node counts for move generation
//! - `proptest.rs` - Property-based tests

mod castling;

use crate::board::{Color, GameState, GameStateBuilder, MoveList, Piece, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// Build a position from algebraic squares.
pub(super) fn position(side: Color, pieces: &[(&str, Color, Piece)]) -> GameState {
    pieces
        .iter()
        .fold(GameStateBuilder::new(), |builder, &(name, color, piece)| {
            builder.piece(sq(name), color, piece)
        })
        .side_to_move(side)
        .build()
}

/// Moves as sorted square-pair strings.
pub(super) fn notations(moves: &MoveList) -> Vec<String> {
    let mut list: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    list.sort();
    list
}
