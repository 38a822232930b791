//! Thread-safe handle around a single engine.

use crate::action::{PlaceOutcome, UndoOutcome};
use crate::engine::Engine;
use crate::error::EngineError;
use crate::snapshot::GameSnapshot;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{instrument, warn};

/// Cloneable handle that gives each call exclusive access to one engine.
///
/// Two placements against the same board never interleave.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    /// Wraps an engine.
    #[instrument(skip(engine))]
    pub fn new(engine: Engine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Engine>, EngineError> {
        self.inner.lock().map_err(|_| {
            warn!("Engine lock poisoned");
            EngineError::Poisoned
        })
    }

    /// See [`Engine::place_stone`].
    #[instrument(skip(self))]
    pub fn place_stone(&self, row: usize, col: usize) -> Result<PlaceOutcome, EngineError> {
        self.lock()?.place_stone(row, col)
    }

    /// See [`Engine::undo`].
    #[instrument(skip(self))]
    pub fn undo(&self) -> Result<UndoOutcome, EngineError> {
        Ok(self.lock()?.undo())
    }

    /// See [`Engine::new_game`].
    #[instrument(skip(self))]
    pub fn new_game(&self, size: Option<usize>) -> Result<(), EngineError> {
        self.lock()?.new_game(size)
    }

    /// See [`Engine::current_state`].
    #[instrument(skip(self))]
    pub fn current_state(&self) -> Result<GameSnapshot, EngineError> {
        Ok(self.lock()?.current_state())
    }
}
