//! Card definitions - static card data.
//!
//! `CardDefinition` holds the printed properties of a card as supplied by a
//! card lookup service. For example, "Sol Ring" is an Artifact costing {1} -
//! these are part of the definition.
//!
//! Instance-specific data (tapped, counters, zone) is stored separately in
//! `CardState`.

use serde::{Deserialize, Serialize};

use super::instance::{CardState, TypeLine};
use crate::core::entity::{CardId, PlayerId, ZoneId};

/// Static card definition.
///
/// ## Example
///
/// ```
/// use commander_engine::cards::CardDefinition;
///
/// let scout = CardDefinition::new("Ornithopter", "Artifact Creature — Thopter")
///     .with_mana_cost("{0}")
///     .with_power_toughness("0", "2");
///
/// assert_eq!(scout.types().as_slice(), ["Artifact", "Creature", "—", "Thopter"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    /// Card name.
    pub name: String,

    /// Printed type line, e.g. `"Legendary Creature — Human Knight"`.
    pub type_line: String,

    #[serde(default)]
    pub mana_cost: Option<String>,

    #[serde(default)]
    pub power: Option<String>,

    #[serde(default)]
    pub toughness: Option<String>,

    /// Rules text.
    #[serde(default)]
    pub text: Option<String>,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(name: impl Into<String>, type_line: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_line: type_line.into(),
            mana_cost: None,
            power: None,
            toughness: None,
            text: None,
        }
    }

    /// Set the mana cost (builder pattern).
    #[must_use]
    pub fn with_mana_cost(mut self, cost: impl Into<String>) -> Self {
        self.mana_cost = Some(cost.into());
        self
    }

    /// Set power and toughness (builder pattern).
    #[must_use]
    pub fn with_power_toughness(mut self, power: impl Into<String>, toughness: impl Into<String>) -> Self {
        self.power = Some(power.into());
        self.toughness = Some(toughness.into());
        self
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Type words of the type line, split on whitespace.
    ///
    /// The `—` separator stays in the sequence as its own word.
    #[must_use]
    pub fn types(&self) -> TypeLine {
        self.type_line.split_whitespace().map(str::to_string).collect()
    }

    /// Check if the type line contains a word (case-sensitive).
    #[must_use]
    pub fn has_type(&self, word: &str) -> bool {
        self.type_line.split_whitespace().any(|w| w == word)
    }

    /// Create a fresh `CardState` for a card entering the game.
    #[must_use]
    pub fn instantiate(
        &self,
        id: impl Into<CardId>,
        zone: impl Into<ZoneId>,
        owner: impl Into<PlayerId>,
    ) -> CardState {
        CardState::new(id, self.name.clone(), self.types(), zone, owner)
    }
}
