//! Castling tests.

use super::{position, sq};
use crate::board::{CastlingError, Color, GameState, Piece};

use Color::{Black, White};
use Piece::{Bishop, King, Knight, Queen, Rook};

/// Both sides with king and rooks on their home squares and nothing else.
fn open_back_ranks(side: Color) -> GameState {
    position(
        side,
        &[
            ("e1", White, King),
            ("a1", White, Rook),
            ("h1", White, Rook),
            ("e8", Black, King),
            ("a8", Black, Rook),
            ("h8", Black, Rook),
        ],
    )
}

#[test]
fn test_white_kingside() {
    let mut game = open_back_ranks(White);
    game.handle_castling(sq("e1"), sq("h1")).unwrap();

    assert_eq!(game.board().piece_at(sq("g1")), Some((White, King)));
    assert_eq!(game.board().piece_at(sq("f1")), Some((White, Rook)));
    assert!(game.board().is_empty(sq("e1")));
    assert!(game.board().is_empty(sq("h1")));
    assert_eq!(game.king_square(White), sq("g1"));
    assert!(!game.white_to_move());

    let history = game.move_history();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|m| m.is_castling()));
    assert_eq!(history[0].to_string(), "e1g1");
    assert_eq!(history[1].to_string(), "h1f1");
}

#[test]
fn test_white_queenside() {
    let mut game = open_back_ranks(White);
    game.handle_castling(sq("e1"), sq("a1")).unwrap();
    assert_eq!(game.board().piece_at(sq("c1")), Some((White, King)));
    assert_eq!(game.board().piece_at(sq("d1")), Some((White, Rook)));
    assert!(game.board().is_empty(sq("a1")));
}

#[test]
fn test_black_both_sides() {
    let mut game = open_back_ranks(Black);
    game.handle_castling(sq("e8"), sq("h8")).unwrap();
    assert_eq!(game.board().piece_at(sq("g8")), Some((Black, King)));
    assert_eq!(game.board().piece_at(sq("f8")), Some((Black, Rook)));
    assert!(game.white_to_move());

    let mut game = open_back_ranks(Black);
    game.handle_castling(sq("e8"), sq("a8")).unwrap();
    assert_eq!(game.board().piece_at(sq("c8")), Some((Black, King)));
    assert_eq!(game.board().piece_at(sq("d8")), Some((Black, Rook)));
    assert_eq!(game.king_square(Black), sq("c8"));
}

#[test]
fn test_single_undo_reverts_castling() {
    let mut game = open_back_ranks(White);
    let before = game.board().clone();
    game.handle_castling(sq("e1"), sq("a1")).unwrap();

    let undone = game.undo_move().unwrap();
    assert_eq!(undone.to_string(), "e1c1");
    assert_eq!(game.board(), &before);
    assert!(game.move_history().is_empty());
    assert!(game.white_to_move());
    assert_eq!(game.king_square(White), sq("e1"));
}

#[test]
fn test_play_recognises_castling_pair() {
    let mut game = open_back_ranks(White);
    let mv = game.play("e1h1").unwrap();
    assert_eq!(mv.to_string(), "e1g1");
    assert!(mv.is_castling());
    assert_eq!(game.board().piece_at(sq("f1")), Some((White, Rook)));

    // the opponent's pair only counts on its own turn
    assert!(game.play("e1a1").is_err());
    assert!(game.play("e8a8").is_ok());
}

#[test]
fn test_blocked_path() {
    let mut game = position(
        White,
        &[
            ("e1", White, King),
            ("h1", White, Rook),
            ("a1", White, Rook),
            ("b1", White, Knight),
            ("g1", White, Bishop),
            ("e8", Black, King),
        ],
    );
    assert_eq!(
        game.handle_castling(sq("e1"), sq("h1")),
        Err(CastlingError::PathBlocked)
    );
    assert_eq!(
        game.handle_castling(sq("e1"), sq("a1")),
        Err(CastlingError::PathBlocked)
    );
    assert!(game.move_history().is_empty());
    assert!(game.white_to_move());
}

#[test]
fn test_refused_while_in_check() {
    let mut game = position(
        White,
        &[
            ("e1", White, King),
            ("h1", White, Rook),
            ("e8", Black, Queen),
            ("a8", Black, King),
        ],
    );
    assert_eq!(
        game.handle_castling(sq("e1"), sq("h1")),
        Err(CastlingError::InCheck)
    );
    assert!(game.white_to_move());
}

#[test]
fn test_refused_when_destination_attacked() {
    let mut game = position(
        White,
        &[
            ("e1", White, King),
            ("h1", White, Rook),
            ("g8", Black, Rook),
            ("a8", Black, King),
        ],
    );
    assert_eq!(
        game.handle_castling(sq("e1"), sq("h1")),
        Err(CastlingError::DestinationAttacked)
    );
    assert_eq!(game.board().piece_at(sq("e1")), Some((White, King)));
}

#[test]
fn test_attacked_transit_square_is_not_checked() {
    let mut game = position(
        White,
        &[
            ("e1", White, King),
            ("h1", White, Rook),
            ("f8", Black, Rook),
            ("a8", Black, King),
        ],
    );
    assert!(game.handle_castling(sq("e1"), sq("h1")).is_ok());
}

#[test]
fn test_rights_are_not_tracked() {
    let mut game = open_back_ranks(White);
    for notation in ["e1f1", "e8f8", "f1e1", "f8e8"] {
        game.play(notation).unwrap();
    }
    assert!(game.handle_castling(sq("e1"), sq("h1")).is_ok());
}

#[test]
fn test_not_a_castling_pair() {
    let mut game = open_back_ranks(White);
    assert_eq!(
        game.handle_castling(sq("e1"), sq("g1")),
        Err(CastlingError::NotCastlingPair)
    );
    assert_eq!(
        game.handle_castling(sq("e8"), sq("h8")),
        Err(CastlingError::NotCastlingPair)
    );
    assert!(!game.is_castling_pair(sq("e1"), sq("d1")));
    assert!(game.is_castling_pair(sq("e1"), sq("a1")));
}

#[test]
fn test_missing_rook() {
    let mut game = position(
        White,
        &[("e1", White, King), ("a1", White, Rook), ("e8", Black, King)],
    );
    assert_eq!(
        game.handle_castling(sq("e1"), sq("h1")),
        Err(CastlingError::MissingPieces)
    );

    let mut game = position(
        White,
        &[
            ("d1", White, King),
            ("h1", White, Rook),
            ("e8", Black, King),
        ],
    );
    assert_eq!(
        game.handle_castling(sq("e1"), sq("h1")),
        Err(CastlingError::MissingPieces)
    );
}

#[test]
fn test_castling_can_give_check() {
    let mut game = position(
        White,
        &[("e1", White, King), ("h1", White, Rook), ("f8", Black, King)],
    );
    game.handle_castling(sq("e1"), sq("h1")).unwrap();
    assert!(game.in_check());
    assert!(!game.is_checkmate());

    game.undo_move();
    assert!(!game.in_check());
}
