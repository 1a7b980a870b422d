//! Action validation against a snapshot.
//!
//! ## Rules
//!
//! - No snapshot: a single `Invalid game state` error, nothing else checked.
//! - Unknown acting player: `Player not found`, and validation carries on.
//! - Move: source zone, then target zone (each stops the checks when
//!   missing), then the card must be in the source zone. Zone ownership is
//!   not checked.
//! - Tap: the card must be somewhere, and in a battlefield zone.
//! - Counters: the card must be somewhere, and the amount positive for both
//!   add and remove.
//! - Attach/detach: rejected unless `ActionRules::allow_attachments` is set.

use serde::{Deserialize, Serialize};

use super::action::GameAction;
use super::error::{ActionError, ActionErrors, ValidationResult};
use crate::core::{Game, ZoneType};

/// Pipeline configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionRules {
    /// Accept attach/detach actions. Off by default.
    pub allow_attachments: bool,
}

impl ActionRules {
    /// Rules with attachments enabled.
    #[must_use]
    pub fn with_attachments() -> Self {
        Self {
            allow_attachments: true,
        }
    }
}

/// Validate with the default rules.
pub fn validate_action(action: &GameAction, snapshot: Option<&Game>) -> ValidationResult {
    validate_with_rules(action, snapshot, ActionRules::default())
}

/// Validate an action, collecting every independent problem.
pub fn validate_with_rules(action: &GameAction, snapshot: Option<&Game>, rules: ActionRules) -> ValidationResult {
    let mut errors = ActionErrors::new();

    let Some(game) = snapshot else {
        errors.push(ActionError::InvalidGameState);
        return ValidationResult { errors };
    };

    if game.player(action.player_id().as_str()).is_none() {
        errors.push(ActionError::PlayerNotFound);
    }

    match action {
        GameAction::MoveCard {
            card_id,
            source_zone_id,
            target_zone_id,
            ..
        } => check_move(
            game,
            card_id.as_str(),
            source_zone_id.as_str(),
            target_zone_id.as_str(),
            &mut errors,
        ),
        GameAction::TapCard { card_id, .. } => check_tap(game, card_id.as_str(), &mut errors),
        GameAction::AddCounter { card_id, amount, .. } | GameAction::RemoveCounter { card_id, amount, .. } => {
            check_counter(game, card_id.as_str(), *amount, &mut errors)
        }
        GameAction::AttachCard {
            card_id,
            target_card_id,
            ..
        } => check_attach(game, rules, card_id.as_str(), target_card_id.as_str(), &mut errors),
        GameAction::DetachCard {
            card_id,
            attachment_id,
            ..
        } => check_detach(game, rules, card_id.as_str(), attachment_id.as_str(), &mut errors),
    }

    ValidationResult { errors }
}

pub(crate) fn check_move(game: &Game, card_id: &str, source_zone_id: &str, target_zone_id: &str, errors: &mut ActionErrors) {
    let Some(source) = game.zone(source_zone_id) else {
        errors.push(ActionError::SourceZoneNotFound);
        return;
    };
    if game.zone(target_zone_id).is_none() {
        errors.push(ActionError::TargetZoneNotFound);
        return;
    }
    if !source.contains(card_id) {
        errors.push(ActionError::CardNotInSourceZone);
    }
}

pub(crate) fn check_tap(game: &Game, card_id: &str, errors: &mut ActionErrors) {
    let Some(zone) = game.zone_containing(card_id) else {
        errors.push(ActionError::CardNotFound);
        return;
    };
    if zone.zone_type != ZoneType::Battlefield {
        errors.push(ActionError::NotOnBattlefield);
    }
}

pub(crate) fn check_counter(game: &Game, card_id: &str, amount: i64, errors: &mut ActionErrors) {
    if game.zone_containing(card_id).is_none() {
        errors.push(ActionError::CardNotFound);
        return;
    }
    if amount <= 0 {
        errors.push(ActionError::NonPositiveAmount);
    }
}

pub(crate) fn check_attach(game: &Game, rules: ActionRules, card_id: &str, target_card_id: &str, errors: &mut ActionErrors) {
    if !rules.allow_attachments {
        errors.push(ActionError::AttachmentsNotImplemented);
        return;
    }
    if game.zone_containing(card_id).is_none() {
        errors.push(ActionError::CardNotFound);
        return;
    }
    if game.zone_containing(target_card_id).is_none() {
        errors.push(ActionError::TargetCardNotFound);
        return;
    }
    if card_id == target_card_id {
        errors.push(ActionError::SelfAttachment);
        return;
    }
    // Attachments are recorded on the host's state.
    if game.card_state(target_card_id).is_none() {
        errors.push(ActionError::TargetCardHasNoState);
    }
}

pub(crate) fn check_detach(game: &Game, rules: ActionRules, card_id: &str, attachment_id: &str, errors: &mut ActionErrors) {
    if !rules.allow_attachments {
        errors.push(ActionError::AttachmentsNotImplemented);
        return;
    }
    if game.zone_containing(card_id).is_none() {
        errors.push(ActionError::CardNotFound);
        return;
    }
    let attached = game
        .card_state(card_id)
        .is_some_and(|card| card.attachments.contains(attachment_id));
    if !attached {
        errors.push(ActionError::AttachmentNotFound);
    }
}
