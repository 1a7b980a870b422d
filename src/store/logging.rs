//! Logging interceptor.
//!
//! Logs every dispatched action with the previous and next snapshot summary.
//! It never alters, reorders or blocks actions.

use tracing::{debug, debug_span, Span};

use crate::core::Game;

use super::action::StoreAction;
use super::interceptor::{Interceptor, Verdict};

/// One-line snapshot summary for log fields.
fn summary(state: Option<&Game>) -> String {
    match state {
        None => "no game".to_string(),
        Some(game) => format!(
            "{} v{} turn {} {} active {}",
            game.id(),
            game.version(),
            game.turn_number(),
            game.phase(),
            game.active_player()
        ),
    }
}

/// Logs every action at debug level.
#[derive(Debug, Default)]
pub struct LoggingInterceptor {
    span: Option<Span>,
}

impl LoggingInterceptor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Interceptor for LoggingInterceptor {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn before(&mut self, action: &StoreAction, state: Option<&Game>) -> Verdict {
        let span = debug_span!("dispatch", kind = action.kind());
        span.in_scope(|| {
            debug!(previous = %summary(state), "Action: {}", action.kind());
            debug!(action = ?action, "payload");
        });
        self.span = Some(span);
        Verdict::Forward
    }

    fn after(&mut self, action: &StoreAction, _previous: Option<&Game>, next: Option<&Game>) {
        let span = self.span.take().unwrap_or_else(|| debug_span!("dispatch", kind = action.kind()));
        span.in_scope(|| debug!(next = %summary(next), "Done: {}", action.kind()));
    }
}
