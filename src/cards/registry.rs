//! Card registry for definition lookup.
//!
//! The `CardRegistry` stands in for the external card-lookup service: it
//! stores card definitions by name and turns them into `CardState`s when a
//! card enters a game.

use rustc_hash::FxHashMap;

use super::definition::CardDefinition;
use super::instance::CardState;
use crate::core::entity::{CardId, PlayerId, ZoneId};

/// Registry of card definitions, keyed by case-insensitive name.
///
/// ## Example
///
/// ```
/// use commander_engine::cards::{CardDefinition, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new("Sol Ring", "Artifact").with_mana_cost("{1}"));
///
/// let found = registry.get("sol ring").unwrap();
/// assert_eq!(found.name, "Sol Ring");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<String, CardDefinition>,
}

fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Returns the definition previously registered under the same name.
    pub fn register(&mut self, card: CardDefinition) -> Option<CardDefinition> {
        self.cards.insert(lookup_key(&card.name), card)
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.get(&lookup_key(name))
    }

    /// Check if a card name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(&lookup_key(name))
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards whose type line contains a word.
    pub fn find_by_type<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a CardDefinition> {
        self.cards.values().filter(move |c| c.has_type(word))
    }

    /// Create a `CardState` for a named card.
    ///
    /// Returns `None` if the name is unknown.
    #[must_use]
    pub fn instantiate(
        &self,
        name: &str,
        id: impl Into<CardId>,
        zone: impl Into<ZoneId>,
        owner: impl Into<PlayerId>,
    ) -> Option<CardState> {
        self.get(name).map(|def| def.instantiate(id, zone, owner))
    }
}
