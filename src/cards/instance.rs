//! Card state - runtime card data.
//!
//! `CardState` represents a specific card in a game at a specific moment.
//! It tracks mutable state like tapped status, counters, attachments and
//! current zone.
//!
//! ## Bare and full cards
//!
//! A zone may reference a card that has no `CardState` at all (only its
//! membership matters). `CardRef` is the tagged view used wherever both
//! kinds must be handled uniformly.

use im::{OrdMap, OrdSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::entity::{CardId, PlayerId, ZoneId};

/// Ordered type words of a card (e.g. `["Artifact", "Creature", "—", "Scout"]`).
pub type TypeLine = SmallVec<[String; 4]>;

/// Raised when a counter total would not fit in `u32`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Counter overflow: {kind} on card {card_id}")]
pub struct CounterOverflow {
    pub card_id: CardId,
    pub kind: String,
}

/// A card with full tracked state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardState {
    /// Card id, shared with the zone reference.
    pub id: CardId,

    /// Card name (from the card lookup).
    pub name: String,

    /// Type words in printed order.
    pub types: TypeLine,

    /// Zone currently holding the card.
    pub current_zone: ZoneId,

    /// Owner (who started with this card).
    pub owner_id: PlayerId,

    /// Is this card tapped?
    pub is_tapped: bool,

    /// Counter kind -> count. A kind is removed once it reaches zero.
    pub counters: OrdMap<String, u32>,

    /// Ids of cards attached to this one.
    pub attachments: OrdSet<CardId>,
}

impl CardState {
    /// Create an untapped card with no counters or attachments.
    #[must_use]
    pub fn new<T>(
        id: impl Into<CardId>,
        name: impl Into<String>,
        types: T,
        current_zone: impl Into<ZoneId>,
        owner_id: impl Into<PlayerId>,
    ) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            types: types.into_iter().map(Into::into).collect(),
            current_zone: current_zone.into(),
            owner_id: owner_id.into(),
            is_tapped: false,
            counters: OrdMap::new(),
            attachments: OrdSet::new(),
        }
    }

    /// Minimal state for a bare reference: empty name and types, everything
    /// else derived from where the reference was found.
    #[must_use]
    pub fn stub(id: &CardId, current_zone: &ZoneId, owner_id: &PlayerId) -> Self {
        Self::new(
            id.clone(),
            String::new(),
            std::iter::empty::<String>(),
            current_zone.clone(),
            owner_id.clone(),
        )
    }

    /// Flip the tapped state.
    pub fn toggle_tapped(&mut self) {
        self.is_tapped = !self.is_tapped;
    }

    /// Get a counter count (0 when absent).
    #[must_use]
    pub fn counter(&self, kind: &str) -> u32 {
        self.counters.get(kind).copied().unwrap_or(0)
    }

    /// Add counters of a kind. Returns the new count.
    pub fn add_counters(&mut self, kind: &str, amount: u32) -> Result<u32, CounterOverflow> {
        if amount == 0 {
            return Ok(self.counter(kind));
        }
        let total = self
            .counter(kind)
            .checked_add(amount)
            .ok_or_else(|| CounterOverflow {
                card_id: self.id.clone(),
                kind: kind.to_string(),
            })?;
        self.counters.insert(kind.to_string(), total);
        Ok(total)
    }

    /// Remove counters of a kind, clamping at zero.
    ///
    /// The kind is deleted once it reaches zero. Returns the new count.
    pub fn remove_counters(&mut self, kind: &str, amount: u32) -> u32 {
        let Some(current) = self.counters.get(kind).copied() else {
            return 0;
        };
        let remaining = current.saturating_sub(amount);
        if remaining == 0 {
            self.counters.remove(kind);
        } else {
            self.counters.insert(kind.to_string(), remaining);
        }
        remaining
    }

    /// Attach a card. Returns false if it was already attached.
    pub fn attach(&mut self, card_id: CardId) -> bool {
        self.attachments.insert(card_id).is_none()
    }

    /// Detach a card. Returns false if it was not attached.
    pub fn detach(&mut self, card_id: &str) -> bool {
        self.attachments.remove(card_id).is_some()
    }
}

/// A card as found in a zone: either a bare id or a full state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardRef<'a> {
    /// Only membership is tracked.
    Bare(&'a CardId),
    /// Full tracked state.
    Full(&'a CardState),
}

impl<'a> CardRef<'a> {
    /// Card id, whichever representation.
    #[must_use]
    pub fn id(&self) -> &'a CardId {
        match *self {
            CardRef::Bare(id) => id,
            CardRef::Full(state) => &state.id,
        }
    }

    /// Full state, if tracked.
    #[must_use]
    pub fn state(&self) -> Option<&'a CardState> {
        match *self {
            CardRef::Bare(_) => None,
            CardRef::Full(state) => Some(state),
        }
    }

    /// Check if this is a bare reference.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        matches!(self, CardRef::Bare(_))
    }
}
