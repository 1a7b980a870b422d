//! The game store: current snapshot plus ordered interceptors.
//!
//! ## Dispatch
//!
//! 1. `before` hooks in registration order; any may block.
//! 2. Reducer on a clone of the current snapshot.
//! 3. Commit on success.
//! 4. `after` hooks in reverse order.
//!
//! The default interceptor stack is
//! `[LoggingInterceptor, ValidationGate, PersistenceInterceptor]`.

use smallvec::SmallVec;
use tracing::error;

use crate::actions::{ActionError, ActionRules, GameAction, StateAccessor};
use crate::core::Game;
use crate::persistence::{PersistenceConfig, Storage};

use super::action::StoreAction;
use super::gate::ValidationGate;
use super::interceptor::{Interceptor, Verdict};
use super::logging::LoggingInterceptor;
use super::persistence::PersistenceInterceptor;
use super::reducer::{reduce, ReduceError};

/// Soft warnings gathered during one dispatch.
pub type Warnings = SmallVec<[String; 1]>;

/// Result of a dispatch that did not fail in the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The reducer ran and its result was committed.
    Applied { warnings: Warnings },
    /// An interceptor stopped the action.
    Blocked { interceptor: &'static str, reason: String },
}

impl DispatchOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, DispatchOutcome::Applied { .. })
    }
}

/// Holds the current game and runs actions through the interceptors.
#[derive(Default)]
pub struct GameStore {
    current: Option<Game>,
    interceptors: Vec<Box<dyn Interceptor>>,
}

impl std::fmt::Debug for GameStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStore")
            .field("current", &self.current)
            .field("interceptors", &self.interceptor_names())
            .finish()
    }
}

impl GameStore {
    /// A store with no interceptors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with the standard logging, validation and persistence stack.
    pub fn with_defaults<S: Storage + 'static>(storage: S, config: PersistenceConfig, rules: ActionRules) -> Self {
        Self::new()
            .with_interceptor(LoggingInterceptor::new())
            .with_interceptor(ValidationGate::new(rules))
            .with_interceptor(PersistenceInterceptor::new(storage, config))
    }

    /// Builder: append an interceptor.
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Box::new(interceptor));
        self
    }

    /// Interceptor names in order.
    #[must_use]
    pub fn interceptor_names(&self) -> Vec<&'static str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> Option<&Game> {
        self.current.as_ref()
    }

    /// Dispatch an action.
    ///
    /// A reducer error leaves the snapshot unchanged; `after` hooks still run
    /// before it is returned.
    pub fn dispatch(&mut self, action: StoreAction) -> Result<DispatchOutcome, ReduceError> {
        let mut warnings = Warnings::new();
        let mut entered = 0;
        let mut blocked = None;

        for interceptor in &mut self.interceptors {
            entered += 1;
            match interceptor.before(&action, self.current.as_ref()) {
                Verdict::Forward => {}
                Verdict::Warn(message) => warnings.push(message),
                Verdict::Block(reason) => {
                    blocked = Some((interceptor.name(), reason));
                    break;
                }
            }
        }

        if let Some((interceptor, reason)) = blocked {
            self.run_after(&action, entered, None);
            return Ok(DispatchOutcome::Blocked { interceptor, reason });
        }

        match reduce(self.current.clone(), &action) {
            Ok(next) => {
                let previous = std::mem::replace(&mut self.current, next);
                self.run_after(&action, entered, Some(previous));
                Ok(DispatchOutcome::Applied { warnings })
            }
            Err(err) => {
                error!(kind = action.kind(), "Reducer failed: {}", err);
                self.run_after(&action, entered, None);
                Err(err)
            }
        }
    }

    /// Run `after` hooks of the first `entered` interceptors in reverse.
    ///
    /// `previous` is `None` when nothing was committed.
    fn run_after(&mut self, action: &StoreAction, entered: usize, previous: Option<Option<Game>>) {
        let current = self.current.as_ref();
        let previous = match &previous {
            Some(previous) => previous.as_ref(),
            None => current,
        };
        for interceptor in self.interceptors[..entered].iter_mut().rev() {
            interceptor.after(action, previous, current);
        }
    }
}

impl StateAccessor for GameStore {
    fn current_game(&self) -> Option<&Game> {
        self.state()
    }

    fn apply(&mut self, action: &GameAction) -> Result<(), ActionError> {
        match self.dispatch(StoreAction::from(action)) {
            Ok(DispatchOutcome::Applied { .. }) => Ok(()),
            Ok(DispatchOutcome::Blocked { interceptor, reason }) => Err(ActionError::Blocked { interceptor, reason }),
            Err(err) => Err(ActionError::Execution(err.to_string())),
        }
    }
}
