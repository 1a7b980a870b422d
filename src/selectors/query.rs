//! Read-only projections over a game snapshot.
//!
//! Every selector takes `Option<&Game>` (`None` = no active game) and returns
//! a safe default instead of failing when there is no game.

use std::borrow::Cow;

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardRef, CardState};
use crate::core::{CardId, Game, GamePhase, Player, PlayerId, ZoneId, ZoneType};
use crate::zones::Zone;

/// Phases in which the active player cannot act.
pub const NON_ACTING_PHASES: [GamePhase; 2] = [GamePhase::Untap, GamePhase::Draw];

/// Where a card sits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardLocation {
    pub zone_id: ZoneId,
    pub owner_id: PlayerId,
}

/// Coarse game status.
///
/// No win condition is detected, so `Finished` is never produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Finished,
}

pub fn current_game(snapshot: Option<&Game>) -> Option<&Game> {
    snapshot
}

pub fn active_player_id(snapshot: Option<&Game>) -> Option<&PlayerId> {
    snapshot.map(Game::active_player)
}

pub fn current_phase(snapshot: Option<&Game>) -> Option<GamePhase> {
    snapshot.map(Game::phase)
}

pub fn turn_number(snapshot: Option<&Game>) -> Option<u32> {
    snapshot.map(Game::turn_number)
}

/// All players; empty when there is no game.
pub fn players(snapshot: Option<&Game>) -> OrdMap<PlayerId, Player> {
    snapshot.map(|g| g.players().clone()).unwrap_or_default()
}

pub fn player_by_id<'a>(snapshot: Option<&'a Game>, player_id: &str) -> Option<&'a Player> {
    snapshot?.player(player_id)
}

pub fn player_life(snapshot: Option<&Game>, player_id: &str) -> Option<i64> {
    player_by_id(snapshot, player_id).map(|p| p.life)
}

/// Commander damage received by a player; empty when absent.
pub fn player_commander_damage(snapshot: Option<&Game>, player_id: &str) -> OrdMap<CardId, u32> {
    player_by_id(snapshot, player_id)
        .map(|p| p.commander_damage.clone())
        .unwrap_or_default()
}

/// Every zone of every player.
pub fn all_zones(snapshot: Option<&Game>) -> Vec<&Zone> {
    snapshot.map(|g| g.zones().collect()).unwrap_or_default()
}

pub fn zone_by_id<'a>(snapshot: Option<&'a Game>, zone_id: &str) -> Option<&'a Zone> {
    snapshot?.zone(zone_id)
}

pub fn zones_by_type(snapshot: Option<&Game>, zone_type: ZoneType) -> Vec<&Zone> {
    all_zones(snapshot)
        .into_iter()
        .filter(|z| z.zone_type == zone_type)
        .collect()
}

pub fn player_zones<'a>(snapshot: Option<&'a Game>, player_id: &str) -> Option<&'a OrdMap<ZoneType, Zone>> {
    player_by_id(snapshot, player_id).map(|p| &p.zones)
}

fn card_refs<'a>(game: &'a Game, zone: &'a Zone) -> impl Iterator<Item = CardRef<'a>> + 'a {
    zone.cards.iter().map(move |id| match game.card_state(id.as_str()) {
        Some(state) => CardRef::Full(state),
        None => CardRef::Bare(id),
    })
}

/// Cards of a zone in order; empty on a miss.
pub fn cards_by_zone<'a>(snapshot: Option<&'a Game>, zone_id: &str) -> Vec<CardRef<'a>> {
    let Some(game) = snapshot else {
        return Vec::new();
    };
    game.zone(zone_id)
        .map(|zone| card_refs(game, zone).collect())
        .unwrap_or_default()
}

/// Full state of a card.
///
/// A bare reference yields a stub with empty name and types, built from the
/// zone that holds it. A tracked state always wins over a stub.
pub fn card_by_id<'a>(snapshot: Option<&'a Game>, card_id: &str) -> Option<Cow<'a, CardState>> {
    let game = snapshot?;
    if let Some(state) = game.card_state(card_id) {
        return Some(Cow::Borrowed(state));
    }
    let zone = game.zone_containing(card_id)?;
    Some(Cow::Owned(CardState::stub(&CardId::new(card_id), &zone.id, &zone.owner_id)))
}

/// First zone holding the card.
pub fn card_location(snapshot: Option<&Game>, card_id: &str) -> Option<CardLocation> {
    snapshot?.zone_containing(card_id).map(|zone| CardLocation {
        zone_id: zone.id.clone(),
        owner_id: zone.owner_id.clone(),
    })
}

/// All cards across a player's six zones, zone by zone.
pub fn cards_by_owner<'a>(snapshot: Option<&'a Game>, player_id: &str) -> Vec<CardRef<'a>> {
    let Some(game) = snapshot else {
        return Vec::new();
    };
    game.player(player_id)
        .map(|p| p.iter_zones().flat_map(|zone| card_refs(game, zone)).collect())
        .unwrap_or_default()
}

pub fn is_player_turn(snapshot: Option<&Game>, player_id: &str) -> bool {
    active_player_id(snapshot).is_some_and(|active| active == player_id)
}

/// True on the player's own turn outside the untap and draw phases.
pub fn can_player_act(snapshot: Option<&Game>, player_id: &str) -> bool {
    is_player_turn(snapshot, player_id)
        && current_phase(snapshot).is_some_and(|phase| !NON_ACTING_PHASES.contains(&phase))
}

pub fn game_status(snapshot: Option<&Game>) -> GameStatus {
    match snapshot {
        None => GameStatus::NotStarted,
        Some(_) => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::zones::ZonePosition;

    fn game() -> Game {
        let mut game = GameConfig::new()
            .with_player("p1", "Alice")
            .with_player("p2", "Bob")
            .build("game-1")
            .unwrap();
        game.introduce_bare_card("forest", "battlefield-p1", ZonePosition::Top)
            .unwrap();
        game.introduce_card(
            CardState::new("elf", "Llanowar Elves", ["Creature", "—", "Elf", "Druid"], "battlefield-p1", "p1"),
            ZonePosition::Top,
        )
        .unwrap();
        game.introduce_bare_card("island", "hand-p2", ZonePosition::Top)
            .unwrap();
        game
    }

    #[test]
    fn test_defaults_without_game() {
        assert!(current_game(None).is_none());
        assert!(active_player_id(None).is_none());
        assert!(current_phase(None).is_none());
        assert!(turn_number(None).is_none());
        assert!(players(None).is_empty());
        assert!(player_by_id(None, "p1").is_none());
        assert!(player_life(None, "p1").is_none());
        assert!(player_commander_damage(None, "p1").is_empty());
        assert!(all_zones(None).is_empty());
        assert!(zone_by_id(None, "hand-p1").is_none());
        assert!(zones_by_type(None, ZoneType::Hand).is_empty());
        assert!(player_zones(None, "p1").is_none());
        assert!(cards_by_zone(None, "hand-p1").is_empty());
        assert!(card_by_id(None, "elf").is_none());
        assert!(card_location(None, "elf").is_none());
        assert!(cards_by_owner(None, "p1").is_empty());
        assert!(!is_player_turn(None, "p1"));
        assert!(!can_player_act(None, "p1"));
        assert_eq!(game_status(None), GameStatus::NotStarted);
    }

    #[test]
    fn test_player_queries() {
        let game = game();
        let snapshot = Some(&game);

        assert_eq!(active_player_id(snapshot).map(PlayerId::as_str), Some("p1"));
        assert_eq!(players(snapshot).len(), 2);
        assert_eq!(player_life(snapshot, "p2"), Some(40));
        assert!(player_by_id(snapshot, "p3").is_none());
        assert!(player_commander_damage(snapshot, "p3").is_empty());
        assert_eq!(game_status(snapshot), GameStatus::InProgress);
    }

    #[test]
    fn test_zone_queries() {
        let game = game();
        let snapshot = Some(&game);

        assert_eq!(all_zones(snapshot).len(), 12);
        assert_eq!(zones_by_type(snapshot, ZoneType::Command).len(), 2);
        assert_eq!(player_zones(snapshot, "p2").map(|z| z.len()), Some(6));
        assert!(zone_by_id(snapshot, "nowhere").is_none());
    }

    #[test]
    fn test_cards_by_zone_mixes_representations() {
        let game = game();
        let cards = cards_by_zone(Some(&game), "battlefield-p1");

        assert_eq!(cards.len(), 2);
        assert!(cards[0].is_bare());
        assert_eq!(cards[1].state().map(|c| c.name.as_str()), Some("Llanowar Elves"));
        assert!(cards_by_zone(Some(&game), "nowhere").is_empty());
    }

    #[test]
    fn test_card_by_id() {
        let game = game();
        let snapshot = Some(&game);

        let elf = card_by_id(snapshot, "elf").unwrap();
        assert!(matches!(elf, Cow::Borrowed(_)));
        assert_eq!(elf.types.len(), 4);

        let island = card_by_id(snapshot, "island").unwrap();
        assert!(island.name.is_empty());
        assert!(island.types.is_empty());
        assert_eq!(island.current_zone, "hand-p2");
        assert_eq!(island.owner_id, "p2");

        assert!(card_by_id(snapshot, "missing").is_none());
    }

    #[test]
    fn test_card_location_and_owner() {
        let game = game();
        let snapshot = Some(&game);

        assert_eq!(
            card_location(snapshot, "island"),
            Some(CardLocation {
                zone_id: ZoneId::new("hand-p2"),
                owner_id: PlayerId::new("p2"),
            })
        );
        let owned: Vec<_> = cards_by_owner(snapshot, "p1").iter().map(|c| c.id().to_string()).collect();
        assert_eq!(owned, vec!["forest", "elf"]);
    }

    #[test]
    fn test_can_player_act_phase_set() {
        let mut game = game();

        for phase in GamePhase::ALL {
            game.set_phase(phase);
            let expected = !matches!(phase, GamePhase::Untap | GamePhase::Draw);
            assert_eq!(can_player_act(Some(&game), "p1"), expected, "phase {}", phase);
            assert!(!can_player_act(Some(&game), "p2"));
        }
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&GameStatus::NotStarted).unwrap(), "\"not_started\"");
        assert_eq!(serde_json::to_string(&GameStatus::InProgress).unwrap(), "\"in_progress\"");
    }
}
