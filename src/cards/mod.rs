//! Card system: definitions, runtime state, and registry.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Printed card data from the card lookup
//! - `CardState`: Runtime card state (zone, owner, tapped, counters)
//! - `CardRef`: A zone entry, either a bare id or a full `CardState`
//! - `CardRegistry`: Card definition lookup by name

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::CardDefinition;
pub use instance::{CardRef, CardState, CounterOverflow, TypeLine};
pub use registry::CardRegistry;

pub use crate::core::entity::CardId;
