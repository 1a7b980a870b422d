//! Game state: the root snapshot.
//!
//! ## Game
//!
//! Complete game snapshot:
//! - Players (each with six zones and commander damage)
//! - Turn progression (active player, turn number, phase, turn order)
//! - Stack of pending card/effect ids
//! - Card arena: the authoritative `CardState` of every fully tracked card
//!
//! Zones hold card ids only. A card referenced by a zone with no arena entry
//! is a *bare reference*; see [`CardRef`].
//!
//! Uses `im` persistent data structures, so `clone()` is O(1). The action
//! pipeline relies on this to mutate a clone and commit it only on success.
//!
//! ## Version
//!
//! Every mutable accessor stamps the game with a fresh version number taken
//! from a process-wide counter. Two snapshots with the same id and version are
//! identical, which is what the selector cache keys on.

use std::sync::atomic::{AtomicU64, Ordering};

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::config::{GamePhase, ZoneType};
use super::entity::{CardId, GameId, PlayerId, ZoneId};
use super::player::Player;
use crate::cards::{CardRef, CardState};
use crate::zones::{Zone, ZonePosition};

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

fn next_version() -> u64 {
    NEXT_VERSION.fetch_add(1, Ordering::Relaxed)
}

/// Errors from introducing cards into a game during setup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("Zone not found: {0}")]
    ZoneNotFound(ZoneId),

    #[error("Card {0} is already in the game")]
    DuplicateCard(CardId),
}

/// Complete game snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    id: GameId,

    players: OrdMap<PlayerId, Player>,

    active_player: PlayerId,

    /// Turn number (starts at 1).
    turn_number: u32,

    phase: GamePhase,

    /// Pending card/effect ids, last = top.
    stack: Vector<CardId>,

    turn_order: Vec<PlayerId>,

    /// Card arena.
    #[serde(default)]
    cards: OrdMap<CardId, CardState>,

    #[serde(skip, default = "next_version")]
    version: u64,
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.players == other.players
            && self.active_player == other.active_player
            && self.turn_number == other.turn_number
            && self.phase == other.phase
            && self.stack == other.stack
            && self.turn_order == other.turn_order
            && self.cards == other.cards
    }
}

impl Eq for Game {}

impl Game {
    /// Create an empty game: no players, turn 1, untap phase.
    ///
    /// Use [`GameConfig`](super::GameConfig) to build a complete, validated
    /// game in one step.
    #[must_use]
    pub fn new(id: impl Into<GameId>) -> Self {
        Self {
            id: id.into(),
            players: OrdMap::new(),
            active_player: PlayerId::default(),
            turn_number: 1,
            phase: GamePhase::Untap,
            stack: Vector::new(),
            turn_order: Vec::new(),
            cards: OrdMap::new(),
            version: next_version(),
        }
    }

    fn touch(&mut self) {
        self.version = next_version();
    }

    // === Reads ===

    #[must_use]
    pub fn id(&self) -> &GameId {
        &self.id
    }

    /// Version stamp of this snapshot.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn players(&self) -> &OrdMap<PlayerId, Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.get(player_id)
    }

    #[must_use]
    pub fn active_player(&self) -> &PlayerId {
        &self.active_player
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn stack(&self) -> &Vector<CardId> {
        &self.stack
    }

    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    /// The card arena.
    #[must_use]
    pub fn cards(&self) -> &OrdMap<CardId, CardState> {
        &self.cards
    }

    /// Full state of a card, if it has one.
    #[must_use]
    pub fn card_state(&self, card_id: &str) -> Option<&CardState> {
        self.cards.get(card_id)
    }

    /// Iterate every zone of every player.
    pub fn zones(&self) -> impl Iterator<Item = &Zone> {
        self.players.values().flat_map(Player::iter_zones)
    }

    /// Find a zone by id.
    #[must_use]
    pub fn zone(&self, zone_id: &str) -> Option<&Zone> {
        self.zones().find(|z| z.id.as_str() == zone_id)
    }

    /// First zone whose sequence contains the card.
    #[must_use]
    pub fn zone_containing(&self, card_id: &str) -> Option<&Zone> {
        self.zones().find(|z| z.contains(card_id))
    }

    /// Locate a card in the game.
    ///
    /// An arena entry always wins over a bare reference.
    #[must_use]
    pub fn card(&self, card_id: &str) -> Option<CardRef<'_>> {
        let zone = self.zone_containing(card_id)?;
        match self.cards.get(card_id) {
            Some(state) => Some(CardRef::Full(state)),
            None => zone
                .cards
                .iter()
                .find(|c| c.as_str() == card_id)
                .map(CardRef::Bare),
        }
    }

    fn locate_zone(&self, zone_id: &str) -> Option<(PlayerId, ZoneType)> {
        self.players.values().find_map(|p| {
            p.zone_by_id(zone_id)
                .map(|z| (p.id.clone(), z.zone_type))
        })
    }

    // === Mutable accessors (each bumps the version) ===

    pub fn player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.touch();
        self.players.get_mut(player_id)
    }

    pub fn zone_mut(&mut self, zone_id: &str) -> Option<&mut Zone> {
        self.touch();
        let (player_id, zone_type) = self.locate_zone(zone_id)?;
        self.players.get_mut(&player_id)?.zone_mut(zone_type)
    }

    pub fn card_mut(&mut self, card_id: &str) -> Option<&mut CardState> {
        self.touch();
        self.cards.get_mut(card_id)
    }

    /// Seat a player (or replace one with the same id).
    ///
    /// A new player is appended to the turn order; the first player seated
    /// becomes active.
    pub fn add_player(&mut self, player: Player) {
        self.touch();
        if !self.turn_order.contains(&player.id) {
            self.turn_order.push(player.id.clone());
        }
        if self.active_player.is_empty() {
            self.active_player = player.id.clone();
        }
        self.players.insert(player.id.clone(), player);
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        self.touch();
        self.phase = phase;
    }

    /// Set the active player. Not checked against `players`.
    pub fn set_active_player(&mut self, player_id: impl Into<PlayerId>) {
        self.touch();
        self.active_player = player_id.into();
    }

    pub fn increment_turn(&mut self) {
        self.touch();
        self.turn_number = self.turn_number.saturating_add(1);
    }

    pub fn set_turn_number(&mut self, turn_number: u32) {
        self.touch();
        self.turn_number = turn_number;
    }

    pub fn set_turn_order(&mut self, turn_order: Vec<PlayerId>) {
        self.touch();
        self.turn_order = turn_order;
    }

    pub fn push_stack(&mut self, id: impl Into<CardId>) {
        self.touch();
        self.stack.push_back(id.into());
    }

    pub fn pop_stack(&mut self) -> Option<CardId> {
        self.touch();
        self.stack.pop_back()
    }

    // === Card setup ===

    /// Introduce a fully tracked card into the zone named by its
    /// `current_zone`.
    pub fn introduce_card(&mut self, card: CardState, position: ZonePosition) -> Result<(), PlacementError> {
        self.check_new_card(&card.id)?;
        let zone = self
            .zone_mut(card.current_zone.as_str())
            .ok_or_else(|| PlacementError::ZoneNotFound(card.current_zone.clone()))?;
        zone.insert(card.id.clone(), position);
        self.cards.insert(card.id.clone(), card);
        Ok(())
    }

    /// Introduce a bare reference into a zone.
    pub fn introduce_bare_card(
        &mut self,
        card_id: impl Into<CardId>,
        zone_id: &str,
        position: ZonePosition,
    ) -> Result<(), PlacementError> {
        let card_id = card_id.into();
        self.check_new_card(&card_id)?;
        let zone = self
            .zone_mut(zone_id)
            .ok_or_else(|| PlacementError::ZoneNotFound(ZoneId::new(zone_id)))?;
        zone.insert(card_id, position);
        Ok(())
    }

    fn check_new_card(&self, card_id: &CardId) -> Result<(), PlacementError> {
        if self.cards.contains_key(card_id) || self.zone_containing(card_id.as_str()).is_some() {
            return Err(PlacementError::DuplicateCard(card_id.clone()));
        }
        Ok(())
    }

    /// Insert an arena entry without placing it in a zone.
    ///
    /// Used when restoring snapshots whose zones already reference the card.
    pub(crate) fn insert_card_state(&mut self, card: CardState) {
        self.touch();
        self.cards.insert(card.id.clone(), card);
    }

    /// Remove a card from every zone and from the arena.
    ///
    /// Returns true if anything was removed.
    pub fn remove_card(&mut self, card_id: &str) -> bool {
        self.touch();
        let mut removed = self.cards.remove(card_id).is_some();
        let holding: Vec<ZoneId> = self
            .zones()
            .filter(|z| z.contains(card_id))
            .map(|z| z.id.clone())
            .collect();
        for zone_id in holding {
            if let Some(zone) = self.zone_mut(zone_id.as_str()) {
                removed |= zone.remove(card_id);
            }
        }
        removed
    }

    /// Move a card between zones.
    ///
    /// The card is removed from the source and appended to the target, and a
    /// full state has its `current_zone` updated. Returns false (and changes
    /// nothing) unless both zones exist and the source holds the card.
    pub fn move_card(&mut self, card_id: &str, from_zone_id: &str, to_zone_id: &str) -> bool {
        let source_holds_card = self.zone(from_zone_id).is_some_and(|z| z.contains(card_id));
        if !source_holds_card || self.zone(to_zone_id).is_none() {
            return false;
        }

        let Some(source) = self.zone_mut(from_zone_id) else {
            return false;
        };
        source.remove(card_id);
        let Some(target) = self.zone_mut(to_zone_id) else {
            return false;
        };
        target.push(CardId::new(card_id));
        let target_id = target.id.clone();

        if let Some(state) = self.cards.get_mut(card_id) {
            state.current_zone = target_id;
        }
        true
    }

    /// Replace a zone's card sequence.
    ///
    /// Ids listed more than once keep their first position. Cards taken from
    /// other zones are removed there, arena cards record their new zone, and
    /// arena cards dropped from the game are deleted. Returns false if the
    /// zone does not exist.
    pub fn replace_zone_cards(&mut self, zone_id: &str, cards: Vec<CardId>) -> bool {
        let Some(zone) = self.zone(zone_id) else {
            return false;
        };
        let zone_id = zone.id.clone();

        let mut sequence: Vector<CardId> = Vector::new();
        for card_id in cards {
            if !sequence.contains(&card_id) {
                sequence.push_back(card_id);
            }
        }
        let dropped: Vec<CardId> = zone.cards.iter().filter(|c| !sequence.contains(c)).cloned().collect();

        let donors: Vec<ZoneId> = self
            .zones()
            .filter(|z| z.id != zone_id && z.cards.iter().any(|c| sequence.contains(c)))
            .map(|z| z.id.clone())
            .collect();
        for donor in donors {
            if let Some(z) = self.zone_mut(donor.as_str()) {
                z.cards = z.cards.iter().filter(|c| !sequence.contains(c)).cloned().collect();
            }
        }

        if let Some(zone) = self.zone_mut(zone_id.as_str()) {
            zone.cards = sequence.clone();
        }
        for card_id in &sequence {
            if let Some(state) = self.cards.get_mut(card_id) {
                state.current_zone = zone_id.clone();
            }
        }
        for card_id in dropped {
            if self.zone_containing(card_id.as_str()).is_none() {
                self.cards.remove(&card_id);
            }
        }
        true
    }
}
