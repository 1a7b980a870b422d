//! Action pipeline: validation and execution of player actions.
//!
//! ## Key Types
//!
//! - `GameAction`: tagged player action (`type` discriminator on the wire)
//! - `ActionRules`: pipeline configuration
//! - `StateAccessor`: read/write seam to the live game
//! - `ActionPipeline`: validate/execute bound to a set of rules

pub mod action;
pub mod error;
pub mod execute;
pub mod validate;

pub use action::{ActionKind, GameAction};
pub use error::{ActionError, ActionErrors, ExecutionReport, ExecutionResult, ValidationResult};
pub use execute::{execute_action, execute_with_rules, ActionPipeline, StateAccessor};
pub use validate::{validate_action, validate_with_rules, ActionRules};
