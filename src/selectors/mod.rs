//! Query layer: pure, read-only projections over a game snapshot.
//!
//! ## Key Types
//!
//! - Free selector functions in [`query`], each taking `Option<&Game>`
//! - `SelectorCache`: memoized multi-step selectors keyed on snapshot version

pub mod memo;
pub mod query;

pub use memo::{CacheStats, SelectorCache};
pub use query::{
    active_player_id, all_zones, can_player_act, card_by_id, card_location, cards_by_owner, cards_by_zone,
    current_game, current_phase, game_status, is_player_turn, player_by_id, player_commander_damage, player_life,
    player_zones, players, turn_number, zone_by_id, zones_by_type, CardLocation, GameStatus, NON_ACTING_PHASES,
};
