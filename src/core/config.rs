//! Game configuration types.
//!
//! The zone and phase vocabularies are fixed:
//! - `ZoneType`: the six zones every player owns
//! - `GamePhase`: the eight turn phases
//!
//! `GameConfig` assembles a complete, validated `Game` snapshot at setup time.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::{GameId, PlayerId};
use super::player::Player;
use super::state::Game;
use crate::validation::{validate_game_state, ValidationError};

/// Default starting life total for commander games.
pub const DEFAULT_STARTING_LIFE: i64 = 40;

/// The six zone types every player must own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ZoneType {
    Hand,
    Library,
    Graveyard,
    Exile,
    Battlefield,
    Command,
}

impl ZoneType {
    /// All zone types, in canonical order.
    pub const ALL: [ZoneType; 6] = [
        ZoneType::Hand,
        ZoneType::Library,
        ZoneType::Graveyard,
        ZoneType::Exile,
        ZoneType::Battlefield,
        ZoneType::Command,
    ];

    /// Wire name of the zone type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ZoneType::Hand => "hand",
            ZoneType::Library => "library",
            ZoneType::Graveyard => "graveyard",
            ZoneType::Exile => "exile",
            ZoneType::Battlefield => "battlefield",
            ZoneType::Command => "command",
        }
    }
}

impl std::fmt::Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised zone type string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid zone type: {0}")]
pub struct ParseZoneTypeError(pub String);

impl FromStr for ZoneType {
    type Err = ParseZoneTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZoneType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseZoneTypeError(s.to_string()))
    }
}

impl TryFrom<String> for ZoneType {
    type Error = ParseZoneTypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ZoneType> for String {
    fn from(t: ZoneType) -> Self {
        t.as_str().to_string()
    }
}

/// The eight phases of a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GamePhase {
    #[default]
    Untap,
    Upkeep,
    Draw,
    Main1,
    Combat,
    Main2,
    End,
    Cleanup,
}

impl GamePhase {
    /// All phases, in turn order.
    pub const ALL: [GamePhase; 8] = [
        GamePhase::Untap,
        GamePhase::Upkeep,
        GamePhase::Draw,
        GamePhase::Main1,
        GamePhase::Combat,
        GamePhase::Main2,
        GamePhase::End,
        GamePhase::Cleanup,
    ];

    /// Wire name of the phase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GamePhase::Untap => "untap",
            GamePhase::Upkeep => "upkeep",
            GamePhase::Draw => "draw",
            GamePhase::Main1 => "main1",
            GamePhase::Combat => "combat",
            GamePhase::Main2 => "main2",
            GamePhase::End => "end",
            GamePhase::Cleanup => "cleanup",
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised phase string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid game phase: {0}")]
pub struct ParseGamePhaseError(pub String);

impl FromStr for GamePhase {
    type Err = ParseGamePhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GamePhase::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseGamePhaseError(s.to_string()))
    }
}

impl TryFrom<String> for GamePhase {
    type Error = ParseGamePhaseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<GamePhase> for String {
    fn from(p: GamePhase) -> Self {
        p.as_str().to_string()
    }
}

/// Complete game setup.
///
/// Players are seated in the order they are added; the first seat starts as
/// the active player. Zone ids follow the `"{zone_type}-{player_id}"` scheme.
///
/// ## Example
///
/// ```
/// use commander_engine::core::{GameConfig, GamePhase};
///
/// let game = GameConfig::new()
///     .with_player("p1", "Alice")
///     .with_player("p2", "Bob")
///     .build("game-1")
///     .unwrap();
///
/// assert_eq!(game.active_player(), "p1");
/// assert_eq!(game.phase(), GamePhase::Untap);
/// assert!(game.zone("hand-p2").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Seated players as `(id, name)`.
    pub players: Vec<(PlayerId, String)>,

    /// Life total each player starts with.
    pub starting_life: i64,

    /// Phase the first turn starts in.
    pub initial_phase: GamePhase,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            starting_life: DEFAULT_STARTING_LIFE,
            initial_phase: GamePhase::Untap,
        }
    }
}

impl GameConfig {
    /// Create an empty configuration with commander defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a player.
    #[must_use]
    pub fn with_player(mut self, id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        self.players.push((id.into(), name.into()));
        self
    }

    /// Set the starting life total.
    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    /// Set the initial phase.
    #[must_use]
    pub fn with_initial_phase(mut self, phase: GamePhase) -> Self {
        self.initial_phase = phase;
        self
    }

    /// Build the snapshot and run the state validator over it.
    ///
    /// Game, players and zones are created together; a configuration that
    /// would produce an invalid snapshot (no players, duplicate ids, negative
    /// life) is rejected as a whole.
    pub fn build(&self, id: impl Into<GameId>) -> Result<Game, ValidationError> {
        let mut game = Game::new(id);
        for (player_id, name) in &self.players {
            game.add_player(Player::new(player_id.clone(), name.clone(), self.starting_life));
        }
        game.set_phase(self.initial_phase);

        validate_game_state(&game)?;
        Ok(game)
    }
}
