//! Players and their zones.
//!
//! A `Player` owns exactly one zone of each `ZoneType`, keyed by type. It also
//! tracks its life total and the commander damage it has received.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::ZoneType;
use super::entity::{CardId, PlayerId};
use crate::zones::Zone;

/// Zone types a player is missing (at most all six).
pub type MissingZones = SmallVec<[ZoneType; 6]>;

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,

    pub name: String,

    /// Life total. May go negative during play.
    pub life: i64,

    /// One zone per type.
    pub zones: OrdMap<ZoneType, Zone>,

    /// Commander card id -> damage dealt to this player.
    #[serde(default)]
    pub commander_damage: OrdMap<CardId, u32>,
}

impl Player {
    /// Create a player with all six zones, named `"{zone_type}-{player_id}"`.
    #[must_use]
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, life: i64) -> Self {
        let id = id.into();
        let zones = ZoneType::ALL
            .into_iter()
            .map(|zone_type| {
                let zone_id = format!("{}-{}", zone_type, id);
                (zone_type, Zone::new(zone_id, zone_type, id.clone()))
            })
            .collect();

        Self {
            id,
            name: name.into(),
            life,
            zones,
            commander_damage: OrdMap::new(),
        }
    }

    /// Create a player with no zones yet.
    ///
    /// Zones must be added with [`Player::with_zone`] before the player is
    /// valid.
    #[must_use]
    pub fn without_zones(id: impl Into<PlayerId>, name: impl Into<String>, life: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            life,
            zones: OrdMap::new(),
            commander_damage: OrdMap::new(),
        }
    }

    /// Builder: file a zone under its own type, replacing any zone of that
    /// type.
    #[must_use]
    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zones.insert(zone.zone_type, zone);
        self
    }

    /// Get the zone of a type.
    #[must_use]
    pub fn zone(&self, zone_type: ZoneType) -> Option<&Zone> {
        self.zones.get(&zone_type)
    }

    /// Get the zone of a type, mutably.
    pub fn zone_mut(&mut self, zone_type: ZoneType) -> Option<&mut Zone> {
        self.zones.get_mut(&zone_type)
    }

    /// Find one of this player's zones by id.
    #[must_use]
    pub fn zone_by_id(&self, zone_id: &str) -> Option<&Zone> {
        self.zones.values().find(|z| z.id.as_str() == zone_id)
    }

    /// Iterate zones in `ZoneType` order.
    pub fn iter_zones(&self) -> impl Iterator<Item = &Zone> {
        self.zones.values()
    }

    /// Zone types this player does not have, in canonical order.
    #[must_use]
    pub fn missing_zones(&self) -> MissingZones {
        ZoneType::ALL
            .into_iter()
            .filter(|t| !self.zones.contains_key(t))
            .collect()
    }

    /// Apply a life delta. Returns the new total.
    pub fn adjust_life(&mut self, delta: i64) -> i64 {
        self.life = self.life.saturating_add(delta);
        self.life
    }

    /// Damage received from a commander (0 when none).
    #[must_use]
    pub fn commander_damage_from(&self, commander_id: &str) -> u32 {
        self.commander_damage.get(commander_id).copied().unwrap_or(0)
    }

    /// Set the accumulated damage from a commander.
    pub fn set_commander_damage(&mut self, commander_id: CardId, damage: u32) {
        self.commander_damage.insert(commander_id, damage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_has_six_zones() {
        let player = Player::new("p1", "Alice", 40);

        assert_eq!(player.zones.len(), 6);
        assert!(player.missing_zones().is_empty());

        let hand = player.zone(ZoneType::Hand).unwrap();
        assert_eq!(hand.id, "hand-p1");
        assert_eq!(hand.owner_id, "p1");
        assert_eq!(player.zone_by_id("battlefield-p1").map(|z| z.zone_type), Some(ZoneType::Battlefield));
    }

    #[test]
    fn test_missing_zones_in_order() {
        let player = Player::without_zones("p1", "Alice", 40)
            .with_zone(Zone::new("library-1", ZoneType::Library, "p1"))
            .with_zone(Zone::new("exile-1", ZoneType::Exile, "p1"));

        assert_eq!(
            player.missing_zones().as_slice(),
            [ZoneType::Hand, ZoneType::Graveyard, ZoneType::Battlefield, ZoneType::Command]
        );
    }

    #[test]
    fn test_life_may_go_negative() {
        let mut player = Player::new("p1", "Alice", 40);
        assert_eq!(player.adjust_life(-50), -10);
        assert_eq!(player.adjust_life(i64::MIN), i64::MIN);
    }

    #[test]
    fn test_commander_damage() {
        let mut player = Player::new("p1", "Alice", 40);
        assert_eq!(player.commander_damage_from("cmdr"), 0);

        player.set_commander_damage(CardId::new("cmdr"), 7);
        assert_eq!(player.commander_damage_from("cmdr"), 7);
    }

    #[test]
    fn test_player_serialized_shape() {
        let mut player = Player::new("p1", "Alice", 40);
        player.set_commander_damage(CardId::new("cmdr"), 3);

        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["zones"]["hand"]["id"], "hand-p1");
        assert_eq!(json["commanderDamage"]["cmdr"], 3);

        let back: Player = serde_json::from_value(json).unwrap();
        assert_eq!(back, player);
    }
}
