//! Zone system for card locations.
//!
//! Every player owns exactly six zones, one per `ZoneType`. A zone stores an
//! ordered sequence of card ids; a card id appears in at most one zone of the
//! whole game at a time.
//!
//! ## Key Types
//!
//! - `Zone`: id, type, owner and ordered card references
//! - `ZonePosition`: position specifier for inserting into a zone

pub mod zone;

pub use zone::{Zone, ZonePosition};

// Re-export zone types from core for convenience
pub use crate::core::config::ZoneType;
pub use crate::core::entity::ZoneId;
