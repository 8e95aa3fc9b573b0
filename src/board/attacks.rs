//! Pin and check detection.
//!
//! Everything here is a pure function of the board: the scan origin and the
//! defending color are parameters, so king-safety probes for hypothetical
//! king squares never touch the game state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Direction, GameState, Piece, Square};

/// A piece that may only move along `direction` (either sense) without
/// exposing its king. `direction` points from the king toward the pinner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pin {
    pub square: Square,
    pub direction: Direction,
}

/// An enemy piece attacking the scanned square.
///
/// For sliders and adjacent attackers `direction` is the unit step from the
/// king toward the attacker; for knights it is the knight's offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Check {
    pub attacker: Square,
    pub direction: Direction,
}

/// Result of scanning outward from a king square.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckInfo {
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl CheckInfo {
    #[must_use]
    pub fn in_check(&self) -> bool {
        !self.checks.is_empty()
    }

    #[must_use]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() > 1
    }

    /// Pin axis of the piece on `sq`, if it is pinned
    #[must_use]
    pub fn pin_on(&self, sq: Square) -> Option<Direction> {
        self.pins
            .iter()
            .find(|pin| pin.square == sq)
            .map(|pin| pin.direction)
    }
}

/// Can `piece` of `attacker` attack back along `dir` from `distance` squares away?
fn attacks_along(piece: Piece, attacker: Color, dir: Direction, distance: isize) -> bool {
    match piece {
        Piece::Rook => !dir.is_diagonal(),
        Piece::Bishop => dir.is_diagonal(),
        Piece::Queen => true,
        Piece::King => distance == 1,
        // pawns capture forward-diagonally, so they sit behind the target
        Piece::Pawn => distance == 1 && dir.is_diagonal() && dir.0 == -attacker.pawn_direction(),
        Piece::Knight => false,
    }
}

/// Scan the eight rays and the knight offsets around `origin` for pieces
/// attacking a `defender` king standing there.
///
/// The defender's own king is transparent so that a king stepping away along
/// a checking ray is still seen as attacked.
#[must_use]
pub fn scan(board: &Board, origin: Square, defender: Color) -> CheckInfo {
    let mut info = CheckInfo::default();
    let enemy = defender.opponent();

    for dir in Direction::ALL {
        let mut candidate: Option<Square> = None;
        for distance in 1..8 {
            let Some(sq) = origin.offset(dir, distance) else {
                break;
            };
            match board.piece_at(sq) {
                None => {}
                Some((color, Piece::King)) if color == defender => {}
                Some((color, _)) if color == defender => {
                    if candidate.is_some() {
                        break;
                    }
                    candidate = Some(sq);
                }
                Some((_, piece)) => {
                    if attacks_along(piece, enemy, dir, distance) {
                        match candidate {
                            None => info.checks.push(Check {
                                attacker: sq,
                                direction: dir,
                            }),
                            Some(square) => info.pins.push(Pin {
                                square,
                                direction: dir,
                            }),
                        }
                    }
                    break;
                }
            }
        }
    }

    for offset in Direction::KNIGHT {
        if let Some(sq) = origin.offset(offset, 1) {
            if board.piece_at(sq) == Some((enemy, Piece::Knight)) {
                info.checks.push(Check {
                    attacker: sq,
                    direction: offset,
                });
            }
        }
    }

    info
}

impl GameState {
    /// Pins against and checks on the side-to-move's king.
    #[must_use]
    pub fn checks_and_pins(&self) -> CheckInfo {
        let mover = self.side_to_move();
        scan(&self.board, self.king_square(mover), mover)
    }

    /// Whether any piece of the side not to move attacks `sq`.
    ///
    /// This is an attack test, not a pseudo-legal move test: pawn pushes do
    /// not count, pawn diagonals count even onto an empty `sq`, and the side
    /// to move's own king is transparent, as for a king probing `sq`.
    #[must_use]
    pub fn square_under_attack(&self, sq: Square) -> bool {
        scan(&self.board, sq, self.side_to_move()).in_check()
    }
}
