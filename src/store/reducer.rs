//! The game slice reducer.
//!
//! `reduce` takes the current snapshot by value and returns the next one.
//! Callers hand it a clone (O(1) with `im`), so an `Err` leaves their snapshot
//! untouched. Actions whose target (player, zone, card) does not exist are
//! no-ops, as are all actions while no game is active except `setGame`.
//! Card updates, taps and counters only touch cards with full state.

use crate::cards::CounterOverflow;
use crate::core::Game;

use super::action::StoreAction;

/// A mutation that could not be applied.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReduceError {
    #[error(transparent)]
    CounterOverflow(#[from] CounterOverflow),

    #[error("Counter amount out of range: {0}")]
    CounterAmountOutOfRange(i64),

    #[error("Commander damage cannot be negative: {0}")]
    NegativeCommanderDamage(i64),

    #[error("Commander damage out of range: {0}")]
    CommanderDamageOutOfRange(i64),
}

fn counter_amount(amount: i64) -> Result<u32, ReduceError> {
    match u32::try_from(amount) {
        Ok(amount) if amount > 0 => Ok(amount),
        _ => Err(ReduceError::CounterAmountOutOfRange(amount)),
    }
}

fn commander_damage(damage: i64) -> Result<u32, ReduceError> {
    if damage < 0 {
        return Err(ReduceError::NegativeCommanderDamage(damage));
    }
    u32::try_from(damage).map_err(|_| ReduceError::CommanderDamageOutOfRange(damage))
}

/// Apply one action to a snapshot.
pub fn reduce(state: Option<Game>, action: &StoreAction) -> Result<Option<Game>, ReduceError> {
    match action {
        StoreAction::SetGame(game) => return Ok(Some(game.as_ref().clone())),
        StoreAction::ClearGame => return Ok(None),
        StoreAction::Other { .. } => return Ok(state),
        _ => {}
    }

    let Some(mut game) = state else {
        return Ok(None);
    };

    match action {
        StoreAction::SetPhase(phase) => game.set_phase(*phase),
        StoreAction::SetActivePlayer(player_id) => game.set_active_player(player_id.clone()),
        StoreAction::IncrementTurn => game.increment_turn(),
        StoreAction::UpdatePlayer { player_id, updates } => {
            if let Some(player) = game.player_mut(player_id.as_str()) {
                updates.clone().apply(player);
            }
        }
        StoreAction::UpdateLifeTotal { player_id, delta } => {
            if let Some(player) = game.player_mut(player_id.as_str()) {
                player.adjust_life(*delta);
            }
        }
        StoreAction::UpdateCommanderDamage {
            player_id,
            commander_id,
            damage,
        } => {
            let damage = commander_damage(*damage)?;
            if let Some(player) = game.player_mut(player_id.as_str()) {
                player.set_commander_damage(commander_id.clone(), damage);
            }
        }
        StoreAction::UpdateZone { zone_id, updates } => {
            if let Some(cards) = &updates.cards {
                game.replace_zone_cards(zone_id.as_str(), cards.clone());
            }
        }
        StoreAction::MoveCard {
            card_id,
            from_zone_id,
            to_zone_id,
        } => {
            game.move_card(card_id.as_str(), from_zone_id.as_str(), to_zone_id.as_str());
        }
        StoreAction::UpdateCard { card_id, updates } => {
            if let Some(card) = game.card_mut(card_id.as_str()) {
                updates.clone().apply(card);
            }
        }
        StoreAction::TapCard(card_id) => {
            if let Some(card) = game.card_mut(card_id.as_str()) {
                card.toggle_tapped();
            }
        }
        StoreAction::AddCounter(payload) => {
            let amount = counter_amount(payload.amount)?;
            if let Some(card) = game.card_mut(payload.card_id.as_str()) {
                card.add_counters(&payload.counter_type, amount)?;
            }
        }
        StoreAction::RemoveCounter(payload) => {
            let amount = counter_amount(payload.amount)?;
            if let Some(card) = game.card_mut(payload.card_id.as_str()) {
                card.remove_counters(&payload.counter_type, amount);
            }
        }
        StoreAction::AttachCard(payload) => {
            if let Some(card) = game.card_mut(payload.card_id.as_str()) {
                card.attach(payload.attachment_id.clone());
            }
        }
        StoreAction::DetachCard(payload) => {
            if let Some(card) = game.card_mut(payload.card_id.as_str()) {
                card.detach(payload.attachment_id.as_str());
            }
        }
        StoreAction::SetGame(_) | StoreAction::ClearGame | StoreAction::Other { .. } => {}
    }

    Ok(Some(game))
}
