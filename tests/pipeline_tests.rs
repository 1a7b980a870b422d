//! Action pipeline tests.
//!
//! Covers validation messages, execution through a bare `Option<Game>` and
//! through a `GameStore`, and the canonical move/tap/life/can-act scenarios.

use commander_engine::actions::{
    execute_action, validate_action, ActionError, ActionPipeline, ActionRules, ExecutionReport, GameAction,
};
use commander_engine::cards::CardState;
use commander_engine::core::{Game, GamePhase, Player, ZoneType};
use commander_engine::persistence::{MemoryStorage, PersistenceConfig};
use commander_engine::selectors::{can_player_act, player_life};
use commander_engine::store::{DispatchOutcome, GameStore, StoreAction};
use commander_engine::zones::{Zone, ZonePosition};

/// One player `p1` with zones named `"{type}-1"`; `card-1` in hand as a bare
/// reference.
fn scenario_game() -> Game {
    let player = ZoneType::ALL
        .into_iter()
        .fold(Player::without_zones("p1", "Alice", 40), |player, zone_type| {
            player.with_zone(Zone::new(format!("{}-1", zone_type), zone_type, "p1"))
        });

    let mut game = Game::new("game-1");
    game.add_player(player);
    game.introduce_bare_card("card-1", "hand-1", ZonePosition::Top).unwrap();
    game
}

fn zone_cards(game: &Game, zone_id: &str) -> Vec<String> {
    game.zone(zone_id)
        .unwrap()
        .cards
        .iter()
        .map(|id| id.to_string())
        .collect()
}

/// Scenario A: a legal move empties the hand and fills the battlefield.
#[test]
fn test_move_card_scenario() {
    let mut state = Some(scenario_game());
    let action = GameAction::move_card("p1", "card-1", "hand-1", "battlefield-1");

    assert!(validate_action(&action, state.as_ref()).is_valid());

    let result = execute_action(&action, &mut state);
    assert!(result.success, "{:?}", result.messages());

    let game = state.unwrap();
    assert!(zone_cards(&game, "hand-1").is_empty());
    assert_eq!(zone_cards(&game, "battlefield-1"), vec!["card-1"]);
}

/// Scenario B: moving a card that is not in the source zone changes nothing.
#[test]
fn test_move_missing_card_scenario() {
    let mut state = Some(scenario_game());
    let before = state.clone();
    let action = GameAction::move_card("p1", "card-X", "hand-1", "battlefield-1");

    let validation = validate_action(&action, state.as_ref());
    assert!(!validation.is_valid());
    assert_eq!(validation.messages(), vec!["Card not found in source zone"]);

    let result = execute_action(&action, &mut state);
    assert!(!result.success);
    assert_eq!(state, before);
}

/// Scenario C: tapping a card in hand is rejected.
#[test]
fn test_tap_in_hand_scenario() {
    let mut game = scenario_game();
    game.introduce_card(
        CardState::new("card-7", "Llanowar Elves", ["Creature", "—", "Elf", "Druid"], "hand-1", "p1"),
        ZonePosition::Top,
    )
    .unwrap();

    let validation = validate_action(&GameAction::tap_card("p1", "card-7"), Some(&game));
    assert_eq!(validation.messages(), vec!["Card must be on the battlefield to be tapped"]);
}

/// Scenario D: a life update below zero warns but still applies.
#[test]
fn test_negative_life_warns_through_store() {
    let mut store = GameStore::with_defaults(MemoryStorage::new(), PersistenceConfig::default(), ActionRules::default());
    store.dispatch(StoreAction::set_game(scenario_game())).unwrap();

    let outcome = store
        .dispatch(StoreAction::UpdateLifeTotal {
            player_id: "p1".into(),
            delta: -50,
        })
        .unwrap();

    match outcome {
        DispatchOutcome::Applied { warnings } => {
            assert_eq!(warnings.as_slice(), ["Life total would go negative for player p1".to_string()]);
        }
        other => panic!("expected the update to apply, got {:?}", other),
    }
    assert_eq!(player_life(store.state(), "p1"), Some(-10));
}

/// Scenario E: the active player cannot act during untap but can in main1.
#[test]
fn test_can_player_act_scenario() {
    let mut game = scenario_game();
    assert_eq!(game.active_player().as_str(), "p1");
    assert_eq!(game.phase(), GamePhase::Untap);
    assert!(!can_player_act(Some(&game), "p1"));

    game.set_phase(GamePhase::Main1);
    assert!(can_player_act(Some(&game), "p1"));
}

#[test]
fn test_validation_without_game() {
    let result = validate_action(&GameAction::tap_card("p1", "card-1"), None);
    assert_eq!(result.messages(), vec!["Invalid game state"]);
}

#[test]
fn test_unknown_player_is_accumulated() {
    let game = scenario_game();
    let action = GameAction::move_card("ghost", "card-X", "hand-1", "battlefield-1");

    let result = validate_action(&action, Some(&game));
    assert_eq!(
        result.errors.as_slice(),
        [ActionError::PlayerNotFound, ActionError::CardNotInSourceZone]
    );
}

#[test]
fn test_missing_source_zone_stops_checks() {
    let game = scenario_game();
    let action = GameAction::move_card("p1", "card-X", "nowhere", "also-nowhere");

    let result = validate_action(&action, Some(&game));
    assert_eq!(result.messages(), vec!["Source zone not found"]);
}

#[test]
fn test_counter_amount_must_be_positive() {
    let game = scenario_game();

    for action in [
        GameAction::add_counter("p1", "card-1", "+1/+1", 0),
        GameAction::remove_counter("p1", "card-1", "+1/+1", -2),
    ] {
        let result = validate_action(&action, Some(&game));
        assert_eq!(result.messages(), vec!["Counter amount must be positive"]);
    }

    let result = validate_action(&GameAction::add_counter("p1", "card-9", "+1/+1", 1), Some(&game));
    assert_eq!(result.messages(), vec!["Card not found"]);
}

#[test]
fn test_tap_bare_reference_is_noop() {
    let mut state = Some(scenario_game());
    execute_action(&GameAction::move_card("p1", "card-1", "hand-1", "battlefield-1"), &mut state);

    let result = execute_action(&GameAction::tap_card("p1", "card-1"), &mut state);

    assert!(result.success);
    assert!(state.unwrap().card_state("card-1").is_none());
}

#[test]
fn test_counters_round_trip() {
    let mut game = scenario_game();
    game.introduce_card(
        CardState::new("card-2", "Walking Ballista", ["Artifact", "Creature"], "battlefield-1", "p1"),
        ZonePosition::Top,
    )
    .unwrap();
    let mut state = Some(game);

    assert!(execute_action(&GameAction::add_counter("p1", "card-2", "+1/+1", 3), &mut state).success);
    assert_eq!(state.as_ref().unwrap().card_state("card-2").unwrap().counter("+1/+1"), 3);

    assert!(execute_action(&GameAction::remove_counter("p1", "card-2", "+1/+1", 5), &mut state).success);
    let card = state.as_ref().unwrap().card_state("card-2").unwrap();
    assert!(!card.counters.contains_key("+1/+1"));
}

#[test]
fn test_attachments_stubbed_by_default() {
    let mut state = Some(scenario_game());
    let before = state.clone();

    for action in [
        GameAction::attach_card("p1", "card-1", "card-2"),
        GameAction::detach_card("p1", "card-1", "card-2"),
    ] {
        let result = execute_action(&action, &mut state);
        assert_eq!(result.messages(), vec!["Attachment actions not yet implemented"]);
    }
    assert_eq!(state, before);
}

#[test]
fn test_attachments_when_enabled() {
    let mut game = scenario_game();
    for (id, name) in [("aura", "Rancor"), ("bear", "Grizzly Bears")] {
        game.introduce_card(
            CardState::new(id, name, ["Creature"], "battlefield-1", "p1"),
            ZonePosition::Top,
        )
        .unwrap();
    }
    let mut state = Some(game);
    let pipeline = ActionPipeline::new(ActionRules::with_attachments());

    assert!(pipeline.execute(&GameAction::attach_card("p1", "aura", "bear"), &mut state).success);
    let bear = state.as_ref().unwrap().card_state("bear").unwrap();
    assert!(bear.attachments.contains("aura"));

    assert!(pipeline.execute(&GameAction::detach_card("p1", "bear", "aura"), &mut state).success);
    let result = pipeline.execute(&GameAction::detach_card("p1", "bear", "aura"), &mut state);
    assert_eq!(result.messages(), vec!["Attachment not found"]);
}

#[test]
fn test_execute_through_store() {
    let storage = MemoryStorage::new();
    let mut store = GameStore::with_defaults(storage.clone(), PersistenceConfig::default(), ActionRules::default());
    store.dispatch(StoreAction::set_game(scenario_game())).unwrap();

    let result = execute_action(&GameAction::move_card("p1", "card-1", "hand-1", "battlefield-1"), &mut store);

    assert!(result.success);
    assert_eq!(zone_cards(store.state().unwrap(), "battlefield-1"), vec!["card-1"]);
    assert!(storage.contains_key("currentGame"));
}

#[test]
fn test_execution_report_shape() {
    let mut state: Option<Game> = None;
    let result = execute_action(&GameAction::tap_card("p1", "card-1"), &mut state);

    let json = serde_json::to_value(ExecutionReport::from(&result)).unwrap();
    assert_eq!(json, serde_json::json!({ "success": false, "errors": ["No active game"] }));
}
