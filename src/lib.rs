mod logging;

pub mod board;
pub mod sync;

pub(crate) use logging::{engine_debug, engine_trace};

pub use board::{
    Board, CastlingError, Color, GameState, GameStateBuilder, Move, MoveError, MoveList, Piece,
    Square,
};
pub use sync::SharedGame;
