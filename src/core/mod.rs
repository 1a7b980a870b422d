//! Core engine types: identifiers, configuration, players and the game snapshot.
//!
//! Game, players and zones are created together through `GameConfig` (or
//! assembled by setup/restore code and then checked by the state validator).

pub mod entity;
pub mod config;
pub mod player;
pub mod state;

pub use entity::{CardId, GameId, PlayerId, ZoneId};
pub use config::{GameConfig, GamePhase, ParseGamePhaseError, ParseZoneTypeError, ZoneType, DEFAULT_STARTING_LIFE};
pub use player::{MissingZones, Player};
pub use state::{Game, PlacementError};
