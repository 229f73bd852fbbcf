//! A game shared between threads.

use crate::{Game, GameConfig, MoveRejected, SetupError, Snapshot, TurnState};
use absorb_core::{PieceId, Square};
use parking_lot::Mutex;
use std::sync::Arc;

/// Handle to a [`Game`] behind a lock.
///
/// Each submission holds the lock from validation through evaluation, so
/// readers only ever observe the state between two completed moves.
/// Cloning the handle shares the same game.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    /// Wraps an existing game.
    pub fn new(game: Game) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Creates a shared standard game from configuration.
    pub fn with_config(config: &GameConfig) -> Result<Self, SetupError> {
        Game::with_config(config).map(Self::new)
    }

    /// See [`Game::submit_move`].
    pub fn submit_move(&self, piece: PieceId, to: Square) -> Result<TurnState, MoveRejected> {
        self.inner.lock().submit_move(piece, to)
    }

    /// See [`Game::submit_move_from`].
    pub fn submit_move_from(&self, from: Square, to: Square) -> Result<TurnState, MoveRejected> {
        self.inner.lock().submit_move_from(from, to)
    }

    /// Returns an owned copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.lock().snapshot()
    }

    /// Runs `f` with the game locked for reading.
    pub fn with<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}
