//! A single player-owned zone and its ordered card sequence.
//!
//! Zones hold card *references* (ids) only. Whether a referenced card also has
//! a full `CardState` is decided by the game's card arena, not by the zone.
//!
//! For ordered zones like the library, index 0 is the bottom and the last
//! index is the top.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::config::ZoneType;
use crate::core::entity::{CardId, PlayerId, ZoneId};

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Add to top of zone (end of the sequence).
    #[default]
    Top,
    /// Add to bottom of zone (start of the sequence).
    Bottom,
    /// Insert at specific index (0 = bottom), clamped to the zone size.
    Index(usize),
}

/// A zone owned by exactly one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Unique across the whole game.
    pub id: ZoneId,

    /// Which of the six fixed zones this is.
    #[serde(rename = "type")]
    pub zone_type: ZoneType,

    /// Card references in order.
    pub cards: Vector<CardId>,

    /// Owning player.
    pub owner_id: PlayerId,
}

impl Zone {
    /// Create an empty zone.
    #[must_use]
    pub fn new(id: impl Into<ZoneId>, zone_type: ZoneType, owner_id: impl Into<PlayerId>) -> Self {
        Self {
            id: id.into(),
            zone_type,
            cards: Vector::new(),
            owner_id: owner_id.into(),
        }
    }

    /// Builder: append cards in order.
    #[must_use]
    pub fn with_cards<I, C>(mut self, cards: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CardId>,
    {
        self.cards.extend(cards.into_iter().map(Into::into));
        self
    }

    /// Check if the zone references a card.
    #[must_use]
    pub fn contains(&self, card_id: &str) -> bool {
        self.cards.iter().any(|c| c.as_str() == card_id)
    }

    /// Number of card references.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the zone is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top card (last in the sequence).
    #[must_use]
    pub fn top(&self) -> Option<&CardId> {
        self.cards.last()
    }

    /// Append a card reference to the top.
    pub fn push(&mut self, card_id: CardId) {
        self.cards.push_back(card_id);
    }

    /// Insert a card reference at a position.
    pub fn insert(&mut self, card_id: CardId, position: ZonePosition) {
        match position {
            ZonePosition::Top => self.cards.push_back(card_id),
            ZonePosition::Bottom => self.cards.push_front(card_id),
            ZonePosition::Index(i) => {
                let idx = i.min(self.cards.len());
                self.cards.insert(idx, card_id);
            }
        }
    }

    /// Remove every reference to a card.
    ///
    /// Returns true if at least one reference was removed.
    pub fn remove(&mut self, card_id: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.as_str() != card_id);
        self.cards.len() != before
    }
}
