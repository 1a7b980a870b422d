//! Interceptor contract.
//!
//! Interceptors wrap every dispatch as ordered middleware. `before` hooks run
//! in registration order and may block the action; `after` hooks run in
//! reverse order once the reducer has run.

use crate::core::Game;

use super::action::StoreAction;

/// Decision of a `before` hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Pass the action on.
    Forward,
    /// Pass the action on, reporting a soft warning.
    Warn(String),
    /// Stop the action; the reducer does not run.
    Block(String),
}

/// A dispatch middleware.
pub trait Interceptor {
    /// Name reported when this interceptor blocks an action.
    fn name(&self) -> &'static str;

    /// Called before the reducer with the current snapshot.
    fn before(&mut self, _action: &StoreAction, _state: Option<&Game>) -> Verdict {
        Verdict::Forward
    }

    /// Called after the reducer with the previous and next snapshots.
    ///
    /// When a later interceptor blocked the action, or the reducer failed,
    /// both snapshots are the unchanged current one.
    fn after(&mut self, _action: &StoreAction, _previous: Option<&Game>, _next: Option<&Game>) {}
}
