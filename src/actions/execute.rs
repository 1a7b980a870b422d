//! Action execution.
//!
//! `execute_action` reads the snapshot through a `StateAccessor`, validates
//! the action and hands it to the accessor to apply. Mutations always run on
//! a clone and are committed only on success.

use tracing::{debug, error};

use super::action::GameAction;
use super::error::{ActionError, ActionErrors, ExecutionResult, ValidationResult};
use super::validate::{validate_with_rules, ActionRules};
use crate::core::Game;
use crate::store::{reduce, StoreAction};

/// Read and write access to the live game.
pub trait StateAccessor {
    /// The current snapshot, if a game is active.
    fn current_game(&self) -> Option<&Game>;

    /// Apply an already validated action. On `Err` the snapshot is unchanged.
    fn apply(&mut self, action: &GameAction) -> Result<(), ActionError>;
}

impl StateAccessor for Option<Game> {
    fn current_game(&self) -> Option<&Game> {
        self.as_ref()
    }

    fn apply(&mut self, action: &GameAction) -> Result<(), ActionError> {
        let next = reduce(self.clone(), &StoreAction::from(action))
            .map_err(|e| ActionError::Execution(e.to_string()))?;
        *self = next;
        Ok(())
    }
}

/// Execute with the default rules.
pub fn execute_action<A: StateAccessor + ?Sized>(action: &GameAction, accessor: &mut A) -> ExecutionResult {
    execute_with_rules(action, accessor, ActionRules::default())
}

/// Validate then apply an action.
pub fn execute_with_rules<A: StateAccessor + ?Sized>(
    action: &GameAction,
    accessor: &mut A,
    rules: ActionRules,
) -> ExecutionResult {
    let kind = action.kind();

    let validation = match accessor.current_game() {
        None => return ExecutionResult::failed(ActionErrors::from_elem(ActionError::NoActiveGame, 1)),
        Some(game) => validate_with_rules(action, Some(game), rules),
    };
    if !validation.is_valid() {
        debug!(%kind, errors = ?validation.messages(), "Action rejected");
        return ExecutionResult::failed(validation.errors);
    }

    match accessor.apply(action) {
        Ok(()) => {
            debug!(%kind, card = %action.card_id(), "Action executed");
            ExecutionResult::succeeded()
        }
        Err(err) => {
            error!(%kind, "Action failed: {}", err);
            ExecutionResult::failed(ActionErrors::from_elem(err, 1))
        }
    }
}

/// Validation and execution bound to one set of rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionPipeline {
    rules: ActionRules,
}

impl ActionPipeline {
    #[must_use]
    pub fn new(rules: ActionRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> ActionRules {
        self.rules
    }

    pub fn validate(&self, action: &GameAction, snapshot: Option<&Game>) -> ValidationResult {
        validate_with_rules(action, snapshot, self.rules)
    }

    pub fn execute<A: StateAccessor + ?Sized>(&self, action: &GameAction, accessor: &mut A) -> ExecutionResult {
        execute_with_rules(action, accessor, self.rules)
    }
}
