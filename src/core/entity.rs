//! Entity identification system.
//!
//! Every game object (game, player, zone, card) is addressed by an opaque
//! string identifier. Each kind gets its own newtype so a `ZoneId` can never
//! be passed where a `CardId` is expected.
//!
//! ## Usage
//!
//! ```
//! use commander_engine::core::{CardId, PlayerId};
//!
//! let player = PlayerId::new("p1");
//! let card: CardId = "card-1".into();
//!
//! assert_eq!(player.as_str(), "p1");
//! assert_eq!(card, "card-1");
//! assert!(!card.is_empty());
//! ```

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Check if the identifier is empty (never valid for a live entity).
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Identifier of a game snapshot. Immutable after creation.
    GameId
);

string_id!(
    /// Identifier of a player, unique within a game.
    PlayerId
);

string_id!(
    /// Identifier of a zone, unique across the whole game.
    ZoneId
);

string_id!(
    /// Identifier of a card (or stack effect).
    CardId
);
