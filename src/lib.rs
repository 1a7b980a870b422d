//! # commander-engine
//!
//! In-memory game state engine for multiplayer commander games.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not objects**: a `Game` is a value. Every collection is an
//!    `im` persistent structure, so clones are O(1) and mutations run on a
//!    clone that is committed only on success.
//!
//! 2. **One home per card**: zones hold card ids; full card state lives in
//!    the game's card arena. A card id appears in at most one zone.
//!
//! 3. **Errors as data**: the action pipeline reports rejections as
//!    `ValidationResult`/`ExecutionResult` values, never panics.
//!
//! ## Modules
//!
//! - `core`: ids, zone types, phases, players, the `Game` snapshot, `GameConfig`
//! - `zones`: ordered card containers
//! - `cards`: card state, card definitions and the registry
//! - `validation`: structural state validator
//! - `selectors`: read-only queries and the version-keyed `SelectorCache`
//! - `actions`: action validation and execution
//! - `store`: reducer, dispatcher and interceptors
//! - `persistence`: storage seam and snapshot codecs

pub mod core;
pub mod zones;
pub mod cards;
pub mod validation;
pub mod selectors;
pub mod actions;
pub mod store;
pub mod persistence;

// Re-export commonly used types
pub use crate::core::{
    CardId, GameId, PlayerId, ZoneId,
    GameConfig, GamePhase, ZoneType, DEFAULT_STARTING_LIFE,
    Game, Player, PlacementError,
};

pub use crate::zones::{Zone, ZonePosition};

pub use crate::cards::{CardDefinition, CardRef, CardRegistry, CardState};

pub use crate::validation::{
    validate_card_state, validate_game_state, validate_player_state, validate_zone_state, ValidationError,
};

pub use crate::selectors::{CardLocation, GameStatus, SelectorCache};

pub use crate::actions::{
    execute_action, validate_action, ActionError, ActionPipeline, ActionRules, ExecutionResult, GameAction,
    StateAccessor, ValidationResult,
};

pub use crate::store::{DispatchOutcome, GameStore, Interceptor, StoreAction, Verdict};

pub use crate::persistence::{MemoryStorage, PersistenceConfig, SnapshotFormat, Storage};
