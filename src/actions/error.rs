//! Action pipeline errors and results.
//!
//! Pipeline errors are returned as data, never raised. The `Display` text of
//! each error is the message reported to callers.

use serde::Serialize;
use smallvec::SmallVec;

/// Errors collected by one validation or execution call.
pub type ActionErrors = SmallVec<[ActionError; 2]>;

/// A reason an action was rejected or failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("Invalid game state")]
    InvalidGameState,

    #[error("No active game")]
    NoActiveGame,

    #[error("Player not found")]
    PlayerNotFound,

    #[error("Source zone not found")]
    SourceZoneNotFound,

    #[error("Target zone not found")]
    TargetZoneNotFound,

    #[error("Card not found in source zone")]
    CardNotInSourceZone,

    #[error("Card not found")]
    CardNotFound,

    #[error("Card must be on the battlefield to be tapped")]
    NotOnBattlefield,

    #[error("Counter amount must be positive")]
    NonPositiveAmount,

    #[error("Attachment actions not yet implemented")]
    AttachmentsNotImplemented,

    #[error("Target card not found")]
    TargetCardNotFound,

    #[error("Target card has no state")]
    TargetCardHasNoState,

    #[error("A card cannot be attached to itself")]
    SelfAttachment,

    #[error("Attachment not found")]
    AttachmentNotFound,

    #[error("Blocked by {interceptor}: {reason}")]
    Blocked { interceptor: &'static str, reason: String },

    /// A mutation failed; the snapshot is unchanged.
    #[error("{0}")]
    Execution(String),
}

fn messages(errors: &ActionErrors) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

/// Outcome of `validate`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: ActionErrors,
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages in the order found.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        messages(&self.errors)
    }
}

/// Outcome of `execute`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionResult {
    pub success: bool,
    pub errors: ActionErrors,
}

impl ExecutionResult {
    #[must_use]
    pub fn succeeded() -> Self {
        Self {
            success: true,
            errors: ActionErrors::new(),
        }
    }

    #[must_use]
    pub fn failed(errors: ActionErrors) -> Self {
        Self { success: false, errors }
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        messages(&self.errors)
    }
}

/// Wire form of a result: `{ "success": bool, "errors": [string] }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExecutionReport {
    pub success: bool,
    pub errors: Vec<String>,
}

impl From<&ExecutionResult> for ExecutionReport {
    fn from(result: &ExecutionResult) -> Self {
        Self {
            success: result.success,
            errors: result.messages(),
        }
    }
}
