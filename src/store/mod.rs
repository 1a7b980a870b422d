//! Game store: reducer, dispatcher and interceptors.
//!
//! ## Key Types
//!
//! - `StoreAction`: the game slice action allow-list
//! - `GameStore`: current snapshot plus interceptor stack
//! - `Interceptor`: before/after dispatch middleware
//! - `ValidationGate`, `LoggingInterceptor`, `PersistenceInterceptor`

pub mod action;
pub mod dispatch;
pub mod gate;
pub mod interceptor;
pub mod logging;
pub mod persistence;
pub mod reducer;

pub use action::{
    AttachmentPayload, CardUpdate, CounterPayload, PlayerUpdate, StoreAction, ZoneUpdate, GAME_ACTION_KINDS,
    GAME_NAMESPACE,
};
pub use dispatch::{DispatchOutcome, GameStore, Warnings};
pub use gate::ValidationGate;
pub use interceptor::{Interceptor, Verdict};
pub use logging::LoggingInterceptor;
pub use persistence::PersistenceInterceptor;
pub use reducer::{reduce, ReduceError};
