//! Snapshot encoding, saving and restoring.
//!
//! Two formats are supported: JSON (the camelCase wire shape) and a compact
//! `bincode` binary form. Restored snapshots are run through the state
//! validator before they are handed back.
//!
//! `import_legacy_json` reads the older wire shape in which a zone's `cards`
//! array mixes bare id strings with inline card objects.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::storage::{Storage, StorageError};
use crate::cards::CardState;
use crate::core::{CardId, Game, GameId, GamePhase, Player, PlayerId, ZoneId, ZoneType};
use crate::validation::{validate_game_state, ValidationError};
use crate::zones::Zone;

/// Key the persistence interceptor writes the live game under.
pub const CURRENT_GAME_KEY: &str = "currentGame";

/// Serialization format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotFormat {
    #[default]
    Json,
    Binary,
}

/// Persistence settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistenceConfig {
    /// Storage key of the live game.
    pub key: String,
    pub format: SnapshotFormat,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            key: CURRENT_GAME_KEY.to_string(),
            format: SnapshotFormat::Json,
        }
    }
}

impl PersistenceConfig {
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: SnapshotFormat) -> Self {
        self.format = format;
        self
    }
}

/// Snapshot encode/decode/restore failures.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to encode snapshot: {0}")]
    Encode(String),

    #[error("Failed to decode snapshot: {0}")]
    Decode(String),

    #[error("Restored snapshot is invalid: {0}")]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Encode a snapshot.
pub fn encode_snapshot(game: &Game, format: SnapshotFormat) -> Result<Vec<u8>, SnapshotError> {
    match format {
        SnapshotFormat::Json => serde_json::to_vec(game).map_err(|e| SnapshotError::Encode(e.to_string())),
        SnapshotFormat::Binary => bincode::serialize(game).map_err(|e| SnapshotError::Encode(e.to_string())),
    }
}

/// Decode a snapshot. No structural validation is done here.
pub fn decode_snapshot(bytes: &[u8], format: SnapshotFormat) -> Result<Game, SnapshotError> {
    match format {
        SnapshotFormat::Json => serde_json::from_slice(bytes).map_err(|e| SnapshotError::Decode(e.to_string())),
        SnapshotFormat::Binary => bincode::deserialize(bytes).map_err(|e| SnapshotError::Decode(e.to_string())),
    }
}

/// Storage key of a saved game.
#[must_use]
pub fn game_key(game_id: &str) -> String {
    format!("game_{}", game_id)
}

/// Save a game under `game_{id}`.
pub fn save_game<S: Storage>(storage: &mut S, game: &Game, format: SnapshotFormat) -> Result<(), SnapshotError> {
    let bytes = encode_snapshot(game, format)?;
    let key = game_key(game.id().as_str());
    debug!(key = %key, bytes = bytes.len(), "Saving game");
    storage.set_item(&key, bytes)?;
    Ok(())
}

/// Load and validate a game saved with [`save_game`].
///
/// Returns `Ok(None)` when nothing is stored under the key.
pub fn load_game<S: Storage>(storage: &S, game_id: &str, format: SnapshotFormat) -> Result<Option<Game>, SnapshotError> {
    load_key(storage, &game_key(game_id), format)
}

/// Load and validate the snapshot stored under an arbitrary key.
pub fn load_key<S: Storage>(storage: &S, key: &str, format: SnapshotFormat) -> Result<Option<Game>, SnapshotError> {
    let Some(bytes) = storage.get_item(key)? else {
        return Ok(None);
    };
    let game = decode_snapshot(&bytes, format)?;
    validate_game_state(&game)?;
    Ok(Some(game))
}

/// Remove a saved game.
pub fn delete_game<S: Storage>(storage: &mut S, game_id: &str) -> Result<(), SnapshotError> {
    storage.remove_item(&game_key(game_id))?;
    Ok(())
}

// === Legacy wire shape ===

#[derive(Clone, Deserialize)]
#[serde(untagged)]
enum LegacyCard {
    Id(CardId),
    Inline(CardState),
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyZone {
    id: ZoneId,
    #[serde(rename = "type")]
    zone_type: ZoneType,
    #[serde(default)]
    cards: Vec<LegacyCard>,
    owner_id: PlayerId,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyPlayer {
    id: PlayerId,
    name: String,
    life: i64,
    zones: OrdMap<ZoneType, LegacyZone>,
    #[serde(default)]
    commander_damage: OrdMap<CardId, u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyGame {
    id: GameId,
    players: OrdMap<PlayerId, LegacyPlayer>,
    active_player: PlayerId,
    turn_number: u32,
    phase: GamePhase,
    #[serde(default)]
    stack: Vec<CardId>,
    turn_order: Vec<PlayerId>,
}

/// Import the legacy JSON shape, lifting inline card objects into the card
/// arena and validating the result.
///
/// Inline cards get their `currentZone` set to the zone that actually holds
/// them. When the same id appears inline more than once the first wins.
pub fn import_legacy_json(json: &str) -> Result<Game, SnapshotError> {
    let legacy: LegacyGame = serde_json::from_str(json).map_err(|e| SnapshotError::Decode(e.to_string()))?;

    let mut game = Game::new(legacy.id);
    let mut arena: Vec<CardState> = Vec::new();

    for (_, legacy_player) in legacy.players {
        let mut player = Player::without_zones(legacy_player.id, legacy_player.name, legacy_player.life);
        player.commander_damage = legacy_player.commander_damage;

        for (key, legacy_zone) in legacy_player.zones {
            let mut zone = Zone::new(legacy_zone.id, legacy_zone.zone_type, legacy_zone.owner_id);
            for card in legacy_zone.cards {
                match card {
                    LegacyCard::Id(id) => zone.push(id),
                    LegacyCard::Inline(mut state) => {
                        zone.push(state.id.clone());
                        if arena.iter().all(|c| c.id != state.id) {
                            state.current_zone = zone.id.clone();
                            arena.push(state);
                        }
                    }
                }
            }
            player.zones.insert(key, zone);
        }
        game.add_player(player);
    }

    for card in arena {
        game.insert_card_state(card);
    }
    game.set_turn_order(legacy.turn_order);
    game.set_active_player(legacy.active_player);
    game.set_turn_number(legacy.turn_number);
    game.set_phase(legacy.phase);
    for id in legacy.stack {
        game.push_stack(id);
    }

    validate_game_state(&game)?;
    Ok(game)
}
