//! Pre-dispatch validation gate.
//!
//! Only game slice actions are examined:
//! - `game/...` kinds that are not recognised are blocked.
//! - With no active game, everything but `setGame` is blocked.
//! - `setGame` must carry a structurally valid snapshot.
//! - Card, zone and player actions must name things that exist, using the
//!   same checks as the action pipeline.
//! - A life change that would drop below zero only warns.
//!
//! Actions outside the game namespace pass through untouched.

use tracing::{error, warn};

use crate::actions::validate::{check_attach, check_counter, check_detach, check_move, check_tap};
use crate::actions::{ActionErrors, ActionRules};
use crate::core::{CardId, Game};
use crate::validation::validate_game_state;

use super::action::StoreAction;
use super::interceptor::{Interceptor, Verdict};

/// Blocks invalid game slice actions before they reach the reducer.
#[derive(Debug, Default)]
pub struct ValidationGate {
    rules: ActionRules,
}

impl ValidationGate {
    #[must_use]
    pub fn new(rules: ActionRules) -> Self {
        Self { rules }
    }

    fn check(&self, action: &StoreAction, game: &Game) -> Verdict {
        let mut errors = ActionErrors::new();
        match action {
            StoreAction::SetGame(next) => {
                if let Err(err) = validate_game_state(next) {
                    return Verdict::Block(err.to_string());
                }
            }
            StoreAction::SetActivePlayer(player_id) | StoreAction::UpdatePlayer { player_id, .. } => {
                if game.player(player_id.as_str()).is_none() {
                    return Verdict::Block(format!("Player {} not found", player_id));
                }
            }
            StoreAction::UpdateLifeTotal { player_id, delta } => {
                let Some(player) = game.player(player_id.as_str()) else {
                    return Verdict::Block(format!("Player {} not found", player_id));
                };
                if player.life.saturating_add(*delta) < 0 {
                    return Verdict::Warn(format!("Life total would go negative for player {}", player_id));
                }
            }
            StoreAction::UpdateCommanderDamage { player_id, damage, .. } => {
                if game.player(player_id.as_str()).is_none() {
                    return Verdict::Block(format!("Player {} not found", player_id));
                }
                if *damage < 0 {
                    return Verdict::Block("Commander damage cannot be negative".to_string());
                }
            }
            StoreAction::UpdateZone { zone_id, updates } => {
                if game.zone(zone_id.as_str()).is_none() {
                    return Verdict::Block(format!("Zone {} not found", zone_id));
                }
                if let Some(cards) = &updates.cards {
                    if let Some(reason) = check_zone_cards(game, zone_id.as_str(), cards) {
                        return Verdict::Block(reason);
                    }
                }
            }
            StoreAction::UpdateCard { card_id, .. } => {
                if game.card(card_id.as_str()).is_none() {
                    return Verdict::Block(format!("Card {} not found", card_id));
                }
            }
            StoreAction::MoveCard {
                card_id,
                from_zone_id,
                to_zone_id,
            } => check_move(game, card_id.as_str(), from_zone_id.as_str(), to_zone_id.as_str(), &mut errors),
            StoreAction::TapCard(card_id) => check_tap(game, card_id.as_str(), &mut errors),
            StoreAction::AddCounter(payload) | StoreAction::RemoveCounter(payload) => {
                check_counter(game, payload.card_id.as_str(), payload.amount, &mut errors)
            }
            StoreAction::AttachCard(payload) => check_attach(
                game,
                self.rules,
                payload.attachment_id.as_str(),
                payload.card_id.as_str(),
                &mut errors,
            ),
            StoreAction::DetachCard(payload) => check_detach(
                game,
                self.rules,
                payload.card_id.as_str(),
                payload.attachment_id.as_str(),
                &mut errors,
            ),
            StoreAction::ClearGame
            | StoreAction::SetPhase(_)
            | StoreAction::IncrementTurn
            | StoreAction::Other { .. } => {}
        }

        if errors.is_empty() {
            Verdict::Forward
        } else {
            let reason = errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
            Verdict::Block(reason)
        }
    }
}

/// A replacement sequence may not repeat a card or take one held elsewhere.
fn check_zone_cards(game: &Game, zone_id: &str, cards: &[CardId]) -> Option<String> {
    for (i, card_id) in cards.iter().enumerate() {
        if cards[..i].contains(card_id) {
            return Some(format!("Card {} appears more than once in zone {}", card_id, zone_id));
        }
        if let Some(holder) = game.zone_containing(card_id.as_str()) {
            if holder.id != zone_id {
                return Some(format!("Card {} is already in zone {}", card_id, holder.id));
            }
        }
    }
    None
}

impl Interceptor for ValidationGate {
    fn name(&self) -> &'static str {
        "validation"
    }

    fn before(&mut self, action: &StoreAction, state: Option<&Game>) -> Verdict {
        if !action.in_game_namespace() {
            return Verdict::Forward;
        }
        if !action.is_allow_listed() {
            error!(kind = action.kind(), "Unknown action type");
            return Verdict::Block("Unknown action type".to_string());
        }

        let verdict = match state {
            Some(game) => self.check(action, game),
            None => match action {
                StoreAction::SetGame(next) => match validate_game_state(next) {
                    Ok(()) => Verdict::Forward,
                    Err(err) => Verdict::Block(err.to_string()),
                },
                _ => {
                    warn!("Action {} ignored: No active game", action.kind());
                    return Verdict::Block("No active game".to_string());
                }
            },
        };

        match &verdict {
            Verdict::Forward => {}
            Verdict::Warn(message) => warn!(kind = action.kind(), "{}", message),
            Verdict::Block(reason) => error!(kind = action.kind(), "Invalid {}: {}", action.kind(), reason),
        }
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, PlayerId, ZoneId};
    use crate::store::action::{AttachmentPayload, CounterPayload, ZoneUpdate};
    use crate::zones::ZonePosition;

    fn game() -> Game {
        let mut game = GameConfig::new()
            .with_player("p1", "Alice")
            .build("game-1")
            .unwrap();
        game.introduce_bare_card("c1", "hand-p1", ZonePosition::Top).unwrap();
        game
    }

    fn is_block(verdict: &Verdict) -> bool {
        matches!(verdict, Verdict::Block(_))
    }

    #[test]
    fn test_non_game_actions_pass() {
        let mut gate = ValidationGate::default();
        assert_eq!(gate.before(&StoreAction::other("decks/addDeck"), None), Verdict::Forward);
    }

    #[test]
    fn test_unknown_game_kind_blocked() {
        let mut gate = ValidationGate::default();
        let game = game();
        assert_eq!(
            gate.before(&StoreAction::other("game/shuffleLibrary"), Some(&game)),
            Verdict::Block("Unknown action type".to_string())
        );
    }

    #[test]
    fn test_no_active_game() {
        let mut gate = ValidationGate::default();

        assert_eq!(
            gate.before(&StoreAction::IncrementTurn, None),
            Verdict::Block("No active game".to_string())
        );
        assert_eq!(gate.before(&StoreAction::set_game(game()), None), Verdict::Forward);
        assert!(is_block(&gate.before(&StoreAction::set_game(Game::new("empty")), None)));
    }

    #[test]
    fn test_zone_replacement_checks() {
        let mut gate = ValidationGate::default();
        let game = game();
        let update = |zone: &str, cards: &[&str]| StoreAction::UpdateZone {
            zone_id: ZoneId::new(zone),
            updates: ZoneUpdate {
                cards: Some(cards.iter().map(|c| CardId::new(*c)).collect()),
            },
        };

        assert_eq!(
            gate.before(&update("library-p1", &["c1"]), Some(&game)),
            Verdict::Block("Card c1 is already in zone hand-p1".to_string())
        );
        assert_eq!(
            gate.before(&update("library-p1", &["n1", "n1"]), Some(&game)),
            Verdict::Block("Card n1 appears more than once in zone library-p1".to_string())
        );
        assert_eq!(gate.before(&update("hand-p1", &["n1", "c1"]), Some(&game)), Verdict::Forward);
        assert_eq!(
            gate.before(&update("nowhere", &[]), Some(&game)),
            Verdict::Block("Zone nowhere not found".to_string())
        );
    }

    #[test]
    fn test_move_checks() {
        let mut gate = ValidationGate::default();
        let game = game();

        let bad = StoreAction::MoveCard {
            card_id: CardId::new("c2"),
            from_zone_id: ZoneId::new("hand-p1"),
            to_zone_id: ZoneId::new("battlefield-p1"),
        };
        assert_eq!(
            gate.before(&bad, Some(&game)),
            Verdict::Block("Card not found in source zone".to_string())
        );

        let good = StoreAction::MoveCard {
            card_id: CardId::new("c1"),
            from_zone_id: ZoneId::new("hand-p1"),
            to_zone_id: ZoneId::new("battlefield-p1"),
        };
        assert_eq!(gate.before(&good, Some(&game)), Verdict::Forward);
    }

    #[test]
    fn test_life_warns_but_forwards() {
        let mut gate = ValidationGate::default();
        let game = game();

        let action = StoreAction::UpdateLifeTotal {
            player_id: PlayerId::new("p1"),
            delta: -50,
        };
        assert_eq!(
            gate.before(&action, Some(&game)),
            Verdict::Warn("Life total would go negative for player p1".to_string())
        );

        let ghost = StoreAction::UpdateLifeTotal {
            player_id: PlayerId::new("ghost"),
            delta: -1,
        };
        assert!(is_block(&gate.before(&ghost, Some(&game))));
    }

    #[test]
    fn test_commander_damage_checks() {
        let mut gate = ValidationGate::default();
        let game = game();

        let negative = StoreAction::UpdateCommanderDamage {
            player_id: PlayerId::new("p1"),
            commander_id: CardId::new("cmdr"),
            damage: -3,
        };
        assert_eq!(
            gate.before(&negative, Some(&game)),
            Verdict::Block("Commander damage cannot be negative".to_string())
        );
    }

    #[test]
    fn test_card_actions_use_pipeline_checks() {
        let mut gate = ValidationGate::default();
        let game = game();

        let tap = StoreAction::TapCard(CardId::new("c1"));
        assert_eq!(
            gate.before(&tap, Some(&game)),
            Verdict::Block("Card must be on the battlefield to be tapped".to_string())
        );

        let zero = StoreAction::AddCounter(CounterPayload {
            card_id: CardId::new("c1"),
            counter_type: "charge".into(),
            amount: 0,
        });
        assert_eq!(
            gate.before(&zero, Some(&game)),
            Verdict::Block("Counter amount must be positive".to_string())
        );

        let attach = StoreAction::AttachCard(AttachmentPayload {
            card_id: CardId::new("c1"),
            attachment_id: CardId::new("c1"),
        });
        assert_eq!(
            gate.before(&attach, Some(&game)),
            Verdict::Block("Attachment actions not yet implemented".to_string())
        );
    }

    #[test]
    fn test_raw_setters_forward() {
        let mut gate = ValidationGate::default();
        let game = game();

        assert_eq!(gate.before(&StoreAction::IncrementTurn, Some(&game)), Verdict::Forward);
        assert!(is_block(&gate.before(&StoreAction::SetActivePlayer(PlayerId::new("p7")), Some(&game))));
    }
}
