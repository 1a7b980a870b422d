//! Query layer tests across a four-player table.

use std::rc::Rc;

use commander_engine::cards::CardState;
use commander_engine::core::{Game, GameConfig, GamePhase, ZoneType};
use commander_engine::selectors::{
    self, active_player_id, all_zones, card_by_id, card_location, cards_by_owner, cards_by_zone, current_phase,
    game_status, is_player_turn, player_by_id, player_commander_damage, player_life, player_zones, players,
    turn_number, zone_by_id, zones_by_type, CardLocation, GameStatus, SelectorCache,
};
use commander_engine::zones::ZonePosition;

fn table() -> Game {
    let mut game = GameConfig::new()
        .with_player("p1", "Alice")
        .with_player("p2", "Bob")
        .with_player("p3", "Carol")
        .with_player("p4", "Dave")
        .build("table")
        .unwrap();

    game.introduce_card(
        CardState::new("cmdr-1", "Atraxa, Praetors' Voice", ["Legendary", "Creature", "—", "Phyrexian"], "command-p1", "p1"),
        ZonePosition::Top,
    )
    .unwrap();
    game.introduce_bare_card("lib-1", "library-p1", ZonePosition::Top).unwrap();
    game.introduce_bare_card("lib-2", "library-p1", ZonePosition::Bottom).unwrap();
    game.introduce_bare_card("bf-3", "battlefield-p3", ZonePosition::Top).unwrap();
    game
}

/// Every selector returns its empty default when no game is active.
#[test]
fn test_no_game_defaults() {
    assert!(selectors::current_game(None).is_none());
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
    assert!(card_by_id(None, "lib-1").is_none());
    assert!(card_location(None, "lib-1").is_none());
    assert!(cards_by_owner(None, "p1").is_empty());
    assert!(!is_player_turn(None, "p1"));
    assert_eq!(game_status(None), GameStatus::NotStarted);
}

#[test]
fn test_basic_projections() {
    let game = table();
    let snapshot = Some(&game);

    assert_eq!(active_player_id(snapshot).map(|p| p.as_str()), Some("p1"));
    assert_eq!(current_phase(snapshot), Some(GamePhase::Untap));
    assert_eq!(turn_number(snapshot), Some(1));
    assert_eq!(players(snapshot).len(), 4);
    assert_eq!(player_life(snapshot, "p3"), Some(40));
    assert_eq!(player_by_id(snapshot, "p2").map(|p| p.name.as_str()), Some("Bob"));
    assert_eq!(game_status(snapshot), GameStatus::InProgress);
}

#[test]
fn test_zone_projections() {
    let game = table();
    let snapshot = Some(&game);

    assert_eq!(all_zones(snapshot).len(), 24);

    let hands = zones_by_type(snapshot, ZoneType::Hand);
    assert_eq!(hands.len(), 4);
    assert!(hands.iter().all(|z| z.zone_type == ZoneType::Hand));

    assert_eq!(player_zones(snapshot, "p2").map(|z| z.len()), Some(6));
    assert!(player_zones(snapshot, "p9").is_none());
    assert_eq!(zone_by_id(snapshot, "exile-p4").map(|z| z.owner_id.as_str()), Some("p4"));
}

#[test]
fn test_cards_by_zone_preserves_order_and_kind() {
    let game = table();

    let library: Vec<_> = cards_by_zone(Some(&game), "library-p1")
        .iter()
        .map(|c| (c.id().to_string(), c.is_bare()))
        .collect();
    assert_eq!(
        library,
        vec![("lib-2".to_string(), true), ("lib-1".to_string(), true)]
    );

    let command = cards_by_zone(Some(&game), "command-p1");
    assert_eq!(command.len(), 1);
    assert!(!command[0].is_bare());
    assert!(cards_by_zone(Some(&game), "missing").is_empty());
}

#[test]
fn test_card_by_id_stub_and_full() {
    let game = table();

    let full = card_by_id(Some(&game), "cmdr-1").unwrap();
    assert_eq!(full.name, "Atraxa, Praetors' Voice");
    assert_eq!(full.types.as_slice(), ["Legendary", "Creature", "—", "Phyrexian"]);

    let stub = card_by_id(Some(&game), "bf-3").unwrap();
    assert!(stub.name.is_empty());
    assert!(stub.types.is_empty());
    assert_eq!(stub.current_zone.as_str(), "battlefield-p3");
    assert_eq!(stub.owner_id.as_str(), "p3");
    assert!(!stub.is_tapped);

    assert!(card_by_id(Some(&game), "nope").is_none());
}

#[test]
fn test_card_location_and_owner() {
    let game = table();

    assert_eq!(
        card_location(Some(&game), "bf-3"),
        Some(CardLocation {
            zone_id: "battlefield-p3".into(),
            owner_id: "p3".into(),
        })
    );

    let owned: Vec<String> = cards_by_owner(Some(&game), "p1")
        .iter()
        .map(|c| c.id().to_string())
        .collect();
    assert_eq!(owned, vec!["lib-2", "lib-1", "cmdr-1"]);
    assert!(cards_by_owner(Some(&game), "p2").is_empty());
}

#[test]
fn test_commander_damage() {
    let mut game = table();
    game.player_mut("p2").unwrap().set_commander_damage("cmdr-1".into(), 7);

    let damage = player_commander_damage(Some(&game), "p2");
    assert_eq!(damage.get("cmdr-1"), Some(&7));
    assert!(player_commander_damage(Some(&game), "p1").is_empty());
}

#[test]
fn test_turn_and_phase_rules() {
    let mut game = table();

    assert!(is_player_turn(Some(&game), "p1"));
    assert!(!is_player_turn(Some(&game), "p2"));

    for phase in GamePhase::ALL {
        game.set_phase(phase);
        let expected = !matches!(phase, GamePhase::Untap | GamePhase::Draw);
        assert_eq!(selectors::can_player_act(Some(&game), "p1"), expected, "{}", phase);
        assert!(!selectors::can_player_act(Some(&game), "p2"));
    }
}

#[test]
fn test_cache_is_stable_until_mutation() {
    let mut game = table();
    let mut cache = SelectorCache::new();

    let first = cache.zones_by_type(Some(&game), ZoneType::Battlefield);
    let second = cache.zones_by_type(Some(&game), ZoneType::Battlefield);
    assert!(Rc::ptr_eq(&first, &second));

    let owned = cache.cards_by_owner(Some(&game), "p1");
    assert_eq!(owned.len(), 3);

    game.move_card("lib-1", "library-p1", "hand-p1");

    let third = cache.zones_by_type(Some(&game), ZoneType::Battlefield);
    assert!(!Rc::ptr_eq(&first, &third));
    assert_eq!(
        cache.card_location(Some(&game), "lib-1").map(|l| l.zone_id.to_string()),
        Some("hand-p1".to_string())
    );
}

#[test]
fn test_cache_agrees_with_plain_selectors() {
    let game = table();
    let mut cache = SelectorCache::new();

    for card in ["cmdr-1", "lib-1", "lib-2", "bf-3", "nope"] {
        assert_eq!(cache.card_location(Some(&game), card), card_location(Some(&game), card));
    }
    assert_eq!(cache.all_zones(Some(&game)).len(), all_zones(Some(&game)).len());
    assert!(cache.stats().hits >= 4);
}
