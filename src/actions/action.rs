//! Typed action payloads for the action pipeline.
//!
//! Every action names the acting player. Serialized form is tagged by
//! `type` (e.g. `"MOVE_CARD"`) with camelCase fields.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, PlayerId, ZoneId};

/// Action discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    MoveCard,
    TapCard,
    AddCounter,
    RemoveCounter,
    AttachCard,
    DetachCard,
}

impl ActionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionKind::MoveCard => "MOVE_CARD",
            ActionKind::TapCard => "TAP_CARD",
            ActionKind::AddCounter => "ADD_COUNTER",
            ActionKind::RemoveCounter => "REMOVE_COUNTER",
            ActionKind::AttachCard => "ATTACH_CARD",
            ActionKind::DetachCard => "DETACH_CARD",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A player action.
///
/// ## Example
///
/// ```
/// use commander_engine::actions::{ActionKind, GameAction};
///
/// let action = GameAction::move_card("p1", "card-1", "hand-1", "battlefield-1");
/// assert_eq!(action.kind(), ActionKind::MoveCard);
/// assert_eq!(action.player_id(), "p1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameAction {
    #[serde(rename_all = "camelCase")]
    MoveCard {
        player_id: PlayerId,
        card_id: CardId,
        source_zone_id: ZoneId,
        target_zone_id: ZoneId,
    },

    #[serde(rename_all = "camelCase")]
    TapCard { player_id: PlayerId, card_id: CardId },

    #[serde(rename_all = "camelCase")]
    AddCounter {
        player_id: PlayerId,
        card_id: CardId,
        counter_type: String,
        amount: i64,
    },

    #[serde(rename_all = "camelCase")]
    RemoveCounter {
        player_id: PlayerId,
        card_id: CardId,
        counter_type: String,
        amount: i64,
    },

    /// Attach `card_id` to `target_card_id`.
    #[serde(rename_all = "camelCase")]
    AttachCard {
        player_id: PlayerId,
        card_id: CardId,
        target_card_id: CardId,
    },

    /// Detach `attachment_id` from `card_id`.
    #[serde(rename_all = "camelCase")]
    DetachCard {
        player_id: PlayerId,
        card_id: CardId,
        attachment_id: CardId,
    },
}

impl GameAction {
    pub fn move_card(
        player_id: impl Into<PlayerId>,
        card_id: impl Into<CardId>,
        source_zone_id: impl Into<ZoneId>,
        target_zone_id: impl Into<ZoneId>,
    ) -> Self {
        GameAction::MoveCard {
            player_id: player_id.into(),
            card_id: card_id.into(),
            source_zone_id: source_zone_id.into(),
            target_zone_id: target_zone_id.into(),
        }
    }

    pub fn tap_card(player_id: impl Into<PlayerId>, card_id: impl Into<CardId>) -> Self {
        GameAction::TapCard {
            player_id: player_id.into(),
            card_id: card_id.into(),
        }
    }

    pub fn add_counter(
        player_id: impl Into<PlayerId>,
        card_id: impl Into<CardId>,
        counter_type: impl Into<String>,
        amount: i64,
    ) -> Self {
        GameAction::AddCounter {
            player_id: player_id.into(),
            card_id: card_id.into(),
            counter_type: counter_type.into(),
            amount,
        }
    }

    pub fn remove_counter(
        player_id: impl Into<PlayerId>,
        card_id: impl Into<CardId>,
        counter_type: impl Into<String>,
        amount: i64,
    ) -> Self {
        GameAction::RemoveCounter {
            player_id: player_id.into(),
            card_id: card_id.into(),
            counter_type: counter_type.into(),
            amount,
        }
    }

    pub fn attach_card(
        player_id: impl Into<PlayerId>,
        card_id: impl Into<CardId>,
        target_card_id: impl Into<CardId>,
    ) -> Self {
        GameAction::AttachCard {
            player_id: player_id.into(),
            card_id: card_id.into(),
            target_card_id: target_card_id.into(),
        }
    }

    pub fn detach_card(
        player_id: impl Into<PlayerId>,
        card_id: impl Into<CardId>,
        attachment_id: impl Into<CardId>,
    ) -> Self {
        GameAction::DetachCard {
            player_id: player_id.into(),
            card_id: card_id.into(),
            attachment_id: attachment_id.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            GameAction::MoveCard { .. } => ActionKind::MoveCard,
            GameAction::TapCard { .. } => ActionKind::TapCard,
            GameAction::AddCounter { .. } => ActionKind::AddCounter,
            GameAction::RemoveCounter { .. } => ActionKind::RemoveCounter,
            GameAction::AttachCard { .. } => ActionKind::AttachCard,
            GameAction::DetachCard { .. } => ActionKind::DetachCard,
        }
    }

    /// The acting player.
    #[must_use]
    pub fn player_id(&self) -> &PlayerId {
        match self {
            GameAction::MoveCard { player_id, .. }
            | GameAction::TapCard { player_id, .. }
            | GameAction::AddCounter { player_id, .. }
            | GameAction::RemoveCounter { player_id, .. }
            | GameAction::AttachCard { player_id, .. }
            | GameAction::DetachCard { player_id, .. } => player_id,
        }
    }

    /// The card the action is about.
    #[must_use]
    pub fn card_id(&self) -> &CardId {
        match self {
            GameAction::MoveCard { card_id, .. }
            | GameAction::TapCard { card_id, .. }
            | GameAction::AddCounter { card_id, .. }
            | GameAction::RemoveCounter { card_id, .. }
            | GameAction::AttachCard { card_id, .. }
            | GameAction::DetachCard { card_id, .. } => card_id,
        }
    }
}
