//! Persistence interceptor.
//!
//! After every allow-listed action the entire current snapshot is written
//! under the configured key (`"currentGame"` by default). `clearGame` removes
//! the key instead. Storage failures are logged and swallowed.

use tracing::{debug, error};

use crate::core::Game;
use crate::persistence::{encode_snapshot, PersistenceConfig, Storage};

use super::action::StoreAction;
use super::interceptor::Interceptor;

/// Writes the live game to storage after each game slice action.
#[derive(Debug)]
pub struct PersistenceInterceptor<S> {
    storage: S,
    config: PersistenceConfig,
    failures: u64,
}

impl<S: Storage> PersistenceInterceptor<S> {
    pub fn new(storage: S, config: PersistenceConfig) -> Self {
        Self {
            storage,
            config,
            failures: 0,
        }
    }

    /// Number of swallowed storage or encoding failures.
    #[must_use]
    pub fn failures(&self) -> u64 {
        self.failures
    }

    fn save(&mut self, game: &Game) {
        let result = encode_snapshot(game, self.config.format)
            .map_err(|e| e.to_string())
            .and_then(|bytes| {
                self.storage
                    .set_item(&self.config.key, bytes)
                    .map_err(|e| e.to_string())
            });
        match result {
            Ok(()) => debug!(key = %self.config.key, "Game state saved to storage"),
            Err(message) => {
                self.failures += 1;
                error!(key = %self.config.key, "Failed to save game state to storage: {}", message);
            }
        }
    }

    fn clear(&mut self) {
        match self.storage.remove_item(&self.config.key) {
            Ok(()) => debug!(key = %self.config.key, "Game state cleared from storage"),
            Err(err) => {
                self.failures += 1;
                error!(key = %self.config.key, "Failed to clear game state from storage: {}", err);
            }
        }
    }
}

impl<S: Storage> Interceptor for PersistenceInterceptor<S> {
    fn name(&self) -> &'static str {
        "persistence"
    }

    fn after(&mut self, action: &StoreAction, _previous: Option<&Game>, next: Option<&Game>) {
        if !action.is_allow_listed() {
            return;
        }
        match (action, next) {
            (StoreAction::ClearGame, _) => self.clear(),
            (_, Some(game)) => self.save(game),
            (_, None) => {}
        }
    }
}
