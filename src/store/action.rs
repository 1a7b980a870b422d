//! Store actions: the game slice's full action vocabulary.
//!
//! The sixteen `game/...` kinds form the *allow-list* the validation gate and
//! persistence interceptor react to. Anything else is `StoreAction::Other`
//! and passes through them untouched.

use im::{OrdMap, OrdSet};
use serde::{Deserialize, Serialize};

use crate::actions::GameAction;
use crate::cards::{CardState, TypeLine};
use crate::core::{CardId, Game, GamePhase, Player, PlayerId, ZoneId};

/// Every allow-listed action kind.
pub const GAME_ACTION_KINDS: [&str; 16] = [
    "game/setGame",
    "game/clearGame",
    "game/setPhase",
    "game/setActivePlayer",
    "game/incrementTurn",
    "game/updatePlayer",
    "game/updateLifeTotal",
    "game/updateCommanderDamage",
    "game/updateZone",
    "game/moveCard",
    "game/updateCard",
    "game/tapCard",
    "game/addCounter",
    "game/removeCounter",
    "game/attachCard",
    "game/detachCard",
];

/// Namespace prefix of game slice actions.
pub const GAME_NAMESPACE: &str = "game/";

/// Partial player update; `None` fields are left alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub life: Option<i64>,
    pub commander_damage: Option<OrdMap<CardId, u32>>,
}

impl PlayerUpdate {
    pub(crate) fn apply(self, player: &mut Player) {
        if let Some(name) = self.name {
            player.name = name;
        }
        if let Some(life) = self.life {
            player.life = life;
        }
        if let Some(damage) = self.commander_damage {
            player.commander_damage = damage;
        }
    }
}

/// Partial zone update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoneUpdate {
    /// Replacement card sequence. Cards move here from other zones.
    pub cards: Option<Vec<CardId>>,
}

/// Partial card update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardUpdate {
    pub name: Option<String>,
    pub types: Option<TypeLine>,
    pub owner_id: Option<PlayerId>,
    pub is_tapped: Option<bool>,
    /// Replacement counters; zero entries are dropped.
    pub counters: Option<OrdMap<String, u32>>,
    pub attachments: Option<OrdSet<CardId>>,
}

impl CardUpdate {
    pub(crate) fn apply(self, card: &mut CardState) {
        if let Some(name) = self.name {
            card.name = name;
        }
        if let Some(types) = self.types {
            card.types = types;
        }
        if let Some(owner_id) = self.owner_id {
            card.owner_id = owner_id;
        }
        if let Some(is_tapped) = self.is_tapped {
            card.is_tapped = is_tapped;
        }
        if let Some(counters) = self.counters {
            card.counters = counters.into_iter().filter(|(_, count)| *count > 0).collect();
        }
        if let Some(attachments) = self.attachments {
            card.attachments = attachments;
        }
    }
}

/// Counter payload for add/remove.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterPayload {
    pub card_id: CardId,
    pub counter_type: String,
    pub amount: i64,
}

/// Attachment payload: `attachment_id` on `card_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentPayload {
    pub card_id: CardId,
    pub attachment_id: CardId,
}

/// An action dispatched to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreAction {
    SetGame(Box<Game>),
    ClearGame,
    SetPhase(GamePhase),
    SetActivePlayer(PlayerId),
    IncrementTurn,
    UpdatePlayer { player_id: PlayerId, updates: PlayerUpdate },
    UpdateLifeTotal { player_id: PlayerId, delta: i64 },
    UpdateCommanderDamage { player_id: PlayerId, commander_id: CardId, damage: i64 },
    UpdateZone { zone_id: ZoneId, updates: ZoneUpdate },
    MoveCard { card_id: CardId, from_zone_id: ZoneId, to_zone_id: ZoneId },
    UpdateCard { card_id: CardId, updates: CardUpdate },
    TapCard(CardId),
    AddCounter(CounterPayload),
    RemoveCounter(CounterPayload),
    AttachCard(AttachmentPayload),
    DetachCard(AttachmentPayload),
    /// An action from outside the game slice, or an unrecognised kind.
    Other { kind: String },
}

impl StoreAction {
    pub fn set_game(game: Game) -> Self {
        StoreAction::SetGame(Box::new(game))
    }

    pub fn other(kind: impl Into<String>) -> Self {
        StoreAction::Other { kind: kind.into() }
    }

    /// Action kind string, e.g. `"game/moveCard"`.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            StoreAction::SetGame(_) => "game/setGame",
            StoreAction::ClearGame => "game/clearGame",
            StoreAction::SetPhase(_) => "game/setPhase",
            StoreAction::SetActivePlayer(_) => "game/setActivePlayer",
            StoreAction::IncrementTurn => "game/incrementTurn",
            StoreAction::UpdatePlayer { .. } => "game/updatePlayer",
            StoreAction::UpdateLifeTotal { .. } => "game/updateLifeTotal",
            StoreAction::UpdateCommanderDamage { .. } => "game/updateCommanderDamage",
            StoreAction::UpdateZone { .. } => "game/updateZone",
            StoreAction::MoveCard { .. } => "game/moveCard",
            StoreAction::UpdateCard { .. } => "game/updateCard",
            StoreAction::TapCard(_) => "game/tapCard",
            StoreAction::AddCounter(_) => "game/addCounter",
            StoreAction::RemoveCounter(_) => "game/removeCounter",
            StoreAction::AttachCard(_) => "game/attachCard",
            StoreAction::DetachCard(_) => "game/detachCard",
            StoreAction::Other { kind } => kind.as_str(),
        }
    }

    /// True for the sixteen allow-listed kinds.
    #[must_use]
    pub fn is_allow_listed(&self) -> bool {
        !matches!(self, StoreAction::Other { .. })
    }

    /// True for kinds in the `game/` namespace, recognised or not.
    #[must_use]
    pub fn in_game_namespace(&self) -> bool {
        self.kind().starts_with(GAME_NAMESPACE)
    }
}

impl From<&GameAction> for StoreAction {
    fn from(action: &GameAction) -> Self {
        match action.clone() {
            GameAction::MoveCard {
                card_id,
                source_zone_id,
                target_zone_id,
                ..
            } => StoreAction::MoveCard {
                card_id,
                from_zone_id: source_zone_id,
                to_zone_id: target_zone_id,
            },
            GameAction::TapCard { card_id, .. } => StoreAction::TapCard(card_id),
            GameAction::AddCounter {
                card_id,
                counter_type,
                amount,
                ..
            } => StoreAction::AddCounter(CounterPayload {
                card_id,
                counter_type,
                amount,
            }),
            GameAction::RemoveCounter {
                card_id,
                counter_type,
                amount,
                ..
            } => StoreAction::RemoveCounter(CounterPayload {
                card_id,
                counter_type,
                amount,
            }),
            GameAction::AttachCard {
                card_id,
                target_card_id,
                ..
            } => StoreAction::AttachCard(AttachmentPayload {
                card_id: target_card_id,
                attachment_id: card_id,
            }),
            GameAction::DetachCard {
                card_id,
                attachment_id,
                ..
            } => StoreAction::DetachCard(AttachmentPayload { card_id, attachment_id }),
        }
    }
}
