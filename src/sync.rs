//! Synchronization primitives for sharing a game between threads.
//!
//! `GameState` has no interior locking. Callers that touch one game from
//! several threads go through a `SharedGame`, which serializes every
//! operation on that game behind a single mutex.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::{GameState, Move, MoveError};

/// A thread-safe handle to one game.
///
/// Clones share the same game; each game gets its own lock.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<GameState>>);

impl SharedGame {
    /// Share a new game at the starting position.
    #[must_use]
    pub fn new() -> Self {
        SharedGame::from(GameState::new())
    }

    /// Lock the game for a sequence of operations.
    pub fn lock(&self) -> MutexGuard<'_, GameState> {
        self.0.lock()
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameState) -> R) -> R {
        let mut game = self.0.lock();
        f(&mut game)
    }

    /// Play a square-pair move under the lock.
    pub fn play(&self, notation: &str) -> Result<Move, MoveError> {
        self.with(|game| game.play(notation))
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.0.lock().clone()
    }
}

impl From<GameState> for SharedGame {
    fn from(game: GameState) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_one_game() {
        let shared = SharedGame::new();
        let other = shared.clone();
        shared.play("e2e4").unwrap();
        assert!(!other.lock().white_to_move());
        assert_eq!(other.snapshot().move_history().len(), 1);
    }

    #[test]
    fn test_concurrent_queries_and_moves() {
        let shared = SharedGame::new();
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let game = shared.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        let count = game.with(|g| g.legal_moves().len());
                        assert!(count > 0);
                    }
                })
            })
            .collect();

        for notation in ["e2e4", "e7e5", "g1f3", "b8c6"] {
            shared.play(notation).unwrap();
        }
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(shared.snapshot().move_history().len(), 4);
    }

    #[test]
    fn test_illegal_move_leaves_game_untouched() {
        let shared = SharedGame::new();
        assert!(shared.play("e2e5").is_err());
        assert!(shared.lock().move_history().is_empty());
    }
}
