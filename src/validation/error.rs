//! Structural validation errors.

use crate::core::{CardId, MissingZones, PlayerId, ZoneId, ZoneType};

fn join_zone_types(types: &MissingZones) -> String {
    types.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
}

/// A structural problem found in a snapshot or one of its parts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    // === Card ===
    #[error("Card must have a non-empty ID")]
    EmptyCardId,

    #[error("Card must have a name")]
    EmptyCardName,

    #[error("Card must have at least one type")]
    NoCardTypes,

    #[error("Card must be in a zone")]
    NoCardZone,

    #[error("Card must have an owner")]
    NoCardOwner,

    #[error("Card {card_id} has a {kind} counter at zero")]
    ZeroCounter { card_id: CardId, kind: String },

    // === Zone ===
    #[error("Zone must have a non-empty ID")]
    EmptyZoneId,

    #[error("Zone must have an owner")]
    NoZoneOwner,

    // === Player ===
    #[error("Player must have a non-empty ID")]
    EmptyPlayerId,

    #[error("Player must have a name")]
    EmptyPlayerName,

    #[error("Player must have a valid life total")]
    InvalidLife(i64),

    /// Every missing zone type is listed, not just the first.
    #[error("Player {player_id} is missing required zones: {}", join_zone_types(.zone_types))]
    MissingZones {
        player_id: PlayerId,
        zone_types: MissingZones,
    },

    #[error("Zone {zone_id} is filed under {key} but has type {zone_type}")]
    MisfiledZone {
        zone_id: ZoneId,
        key: ZoneType,
        zone_type: ZoneType,
    },

    #[error("Zone {zone_id} is owned by {owner_id}, not by player {player_id}")]
    ForeignZone {
        zone_id: ZoneId,
        owner_id: PlayerId,
        player_id: PlayerId,
    },

    // === Game ===
    #[error("Game must have a non-empty ID")]
    EmptyGameId,

    #[error("Game must have an active player")]
    EmptyActivePlayer,

    #[error("Active player must be a valid player ID")]
    UnknownActivePlayer(PlayerId),

    #[error("Game must have a valid turn number")]
    InvalidTurnNumber(u32),

    #[error("Game must have a non-empty turn order")]
    EmptyTurnOrder,

    #[error("Player {player_id} is stored under key {key}")]
    MisfiledPlayer { key: PlayerId, player_id: PlayerId },

    #[error("Turn order contains invalid player ID: {0}")]
    UnknownTurnOrderPlayer(PlayerId),

    #[error("Active player {0} is not in the turn order")]
    ActivePlayerNotInTurnOrder(PlayerId),

    #[error("Duplicate zone ID: {0}")]
    DuplicateZoneId(ZoneId),

    #[error("Card {card_id} appears in zones {first} and {second}")]
    DuplicateCardReference {
        card_id: CardId,
        first: ZoneId,
        second: ZoneId,
    },

    #[error("Card {0} has state but is not in any zone")]
    UnplacedCard(CardId),

    #[error("Card {card_id} records zone {recorded} but is held by {actual}")]
    CardZoneMismatch {
        card_id: CardId,
        recorded: ZoneId,
        actual: ZoneId,
    },
}
