//! Pure structural checks over snapshots.
//!
//! Each function returns the first problem found, except for zone
//! completeness: a player missing several zone types gets one error listing
//! all of them.
//!
//! Type-level problems (a non-boolean tapped flag, an unknown zone type or
//! phase) cannot be represented by these types at all. They surface when a
//! snapshot is decoded, see [`crate::persistence`].

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::error::ValidationError;
use crate::cards::CardState;
use crate::core::{CardId, Game, MissingZones, Player, ZoneId, ZoneType};
use crate::zones::Zone;

/// Check a single card state.
pub fn validate_card_state(card: &CardState) -> Result<(), ValidationError> {
    if card.id.is_empty() {
        return Err(ValidationError::EmptyCardId);
    }
    if card.name.is_empty() {
        return Err(ValidationError::EmptyCardName);
    }
    if card.types.is_empty() {
        return Err(ValidationError::NoCardTypes);
    }
    if card.current_zone.is_empty() {
        return Err(ValidationError::NoCardZone);
    }
    if card.owner_id.is_empty() {
        return Err(ValidationError::NoCardOwner);
    }
    if let Some((kind, _)) = card.counters.iter().find(|(_, count)| **count == 0) {
        return Err(ValidationError::ZeroCounter {
            card_id: card.id.clone(),
            kind: kind.clone(),
        });
    }
    Ok(())
}

/// Check a single zone.
pub fn validate_zone_state(zone: &Zone) -> Result<(), ValidationError> {
    if zone.id.is_empty() {
        return Err(ValidationError::EmptyZoneId);
    }
    if zone.owner_id.is_empty() {
        return Err(ValidationError::NoZoneOwner);
    }
    Ok(())
}

/// Check a player and all of its zones.
///
/// Negative life is rejected here even though live play allows it.
pub fn validate_player_state(player: &Player) -> Result<(), ValidationError> {
    if player.id.is_empty() {
        return Err(ValidationError::EmptyPlayerId);
    }
    if player.name.is_empty() {
        return Err(ValidationError::EmptyPlayerName);
    }
    if player.life < 0 {
        return Err(ValidationError::InvalidLife(player.life));
    }

    let mut missing = MissingZones::new();
    for zone_type in ZoneType::ALL {
        let Some(zone) = player.zones.get(&zone_type) else {
            missing.push(zone_type);
            continue;
        };
        validate_zone_state(zone)?;
        if zone.zone_type != zone_type {
            return Err(ValidationError::MisfiledZone {
                zone_id: zone.id.clone(),
                key: zone_type,
                zone_type: zone.zone_type,
            });
        }
        if zone.owner_id != player.id {
            return Err(ValidationError::ForeignZone {
                zone_id: zone.id.clone(),
                owner_id: zone.owner_id.clone(),
                player_id: player.id.clone(),
            });
        }
    }

    if !missing.is_empty() {
        return Err(ValidationError::MissingZones {
            player_id: player.id.clone(),
            zone_types: missing,
        });
    }
    Ok(())
}

/// Check a whole game snapshot.
///
/// Beyond the per-entity checks this enforces the cross-entity invariants:
/// `active_player ∈ turn_order ⊆ players`, unique zone ids, exclusive zone
/// membership, and arena cards recording the zone that holds them.
pub fn validate_game_state(game: &Game) -> Result<(), ValidationError> {
    if game.id().is_empty() {
        return Err(ValidationError::EmptyGameId);
    }
    if game.active_player().is_empty() {
        return Err(ValidationError::EmptyActivePlayer);
    }
    if !game.players().contains_key(game.active_player()) {
        return Err(ValidationError::UnknownActivePlayer(game.active_player().clone()));
    }
    if game.turn_number() < 1 {
        return Err(ValidationError::InvalidTurnNumber(game.turn_number()));
    }
    if game.turn_order().is_empty() {
        return Err(ValidationError::EmptyTurnOrder);
    }

    for (key, player) in game.players() {
        if *key != player.id {
            return Err(ValidationError::MisfiledPlayer {
                key: key.clone(),
                player_id: player.id.clone(),
            });
        }
        validate_player_state(player)?;
    }

    if let Some(unknown) = game.turn_order().iter().find(|id| !game.players().contains_key(*id)) {
        return Err(ValidationError::UnknownTurnOrderPlayer(unknown.clone()));
    }
    if !game.turn_order().contains(game.active_player()) {
        return Err(ValidationError::ActivePlayerNotInTurnOrder(game.active_player().clone()));
    }

    let holders = check_membership(game)?;

    for card in game.cards().values() {
        validate_card_state(card)?;
        let Some(actual) = holders.get(&card.id) else {
            return Err(ValidationError::UnplacedCard(card.id.clone()));
        };
        if card.current_zone != **actual {
            return Err(ValidationError::CardZoneMismatch {
                card_id: card.id.clone(),
                recorded: card.current_zone.clone(),
                actual: (*actual).clone(),
            });
        }
    }
    Ok(())
}

/// Unique zone ids and exclusive membership. Returns card -> holding zone.
fn check_membership(game: &Game) -> Result<FxHashMap<&CardId, &ZoneId>, ValidationError> {
    let mut seen_zones: SmallVec<[&ZoneId; 24]> = SmallVec::new();
    let mut holders: FxHashMap<&CardId, &ZoneId> = FxHashMap::default();

    for zone in game.zones() {
        if seen_zones.contains(&&zone.id) {
            return Err(ValidationError::DuplicateZoneId(zone.id.clone()));
        }
        seen_zones.push(&zone.id);

        for card_id in &zone.cards {
            if let Some(first) = holders.insert(card_id, &zone.id) {
                return Err(ValidationError::DuplicateCardReference {
                    card_id: card_id.clone(),
                    first: first.clone(),
                    second: zone.id.clone(),
                });
            }
        }
    }
    Ok(holders)
}
