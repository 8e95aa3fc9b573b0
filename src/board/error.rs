//! Error types for game state operations.

use std::fmt;

use super::types::Square;

/// Error type for square validation and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row or column outside 0-7
    OutOfBounds { row: usize, col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { row, col } => {
                write!(f, "Square ({row}, {col}) out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for square-pair move notation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string must be exactly 4 characters
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for building and applying moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A square outside the board
    InvalidSquare { square: Square },
    /// The start square holds no piece, or not the piece the move was built with
    EmptySquare { square: Square },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
    /// The destination no longer holds the piece the move was built to capture
    StaleMove { notation: String },
    /// Move notation could not be parsed
    Parse(MoveParseError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidSquare { square } => {
                write!(f, "Square {square} is off the board")
            }
            MoveError::EmptySquare { square } => {
                write!(f, "No matching piece on {square}")
            }
            MoveError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
            MoveError::StaleMove { notation } => {
                write!(f, "Move '{notation}' was built for a different position")
            }
            MoveError::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveParseError> for MoveError {
    fn from(err: MoveParseError) -> Self {
        MoveError::Parse(err)
    }
}

/// Reasons a castling request is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingError {
    /// The squares are not one of the four king-to-rook pairs
    NotCastlingPair,
    /// The mover's king or rook is not on its home square
    MissingPieces,
    /// The mover is currently in check
    InCheck,
    /// A square between king and rook is occupied
    PathBlocked,
    /// The king's destination is attacked
    DestinationAttacked,
}

impl fmt::Display for CastlingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastlingError::NotCastlingPair => write!(f, "Not a castling square pair"),
            CastlingError::MissingPieces => write!(f, "King or rook not on its home square"),
            CastlingError::InCheck => write!(f, "Cannot castle out of check"),
            CastlingError::PathBlocked => write!(f, "Squares between king and rook are occupied"),
            CastlingError::DestinationAttacked => write!(f, "King's destination is attacked"),
        }
    }
}

impl std::error::Error for CastlingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_bounds() {
        let err = SquareError::OutOfBounds { row: 9, col: 2 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_move_error_empty_square() {
        let err = MoveError::EmptySquare { square: Square(4, 4) };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_move_error_illegal_move() {
        let err = MoveError::IllegalMove {
            notation: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_move_error_stale_move() {
        let err = MoveError::StaleMove {
            notation: "e4d5".to_string(),
        };
        assert!(err.to_string().contains("e4d5"));
    }

    #[test]
    fn test_move_error_wraps_parse_error() {
        let err: MoveError = MoveParseError::InvalidLength { len: 3 }.into();
        assert!(err.to_string().contains('3'));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_castling_error_messages() {
        assert!(CastlingError::InCheck.to_string().contains("check"));
        assert_ne!(CastlingError::PathBlocked, CastlingError::DestinationAttacked);
    }
}
