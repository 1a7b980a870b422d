//! State validator.
//!
//! Pure functions that check a candidate snapshot (or one of its parts)
//! against the entity invariants. They are not on the hot path of every
//! action: callers run them on externally constructed or restored state.

pub mod error;
pub mod validator;

pub use error::ValidationError;
pub use validator::{validate_card_state, validate_game_state, validate_player_state, validate_zone_state};
