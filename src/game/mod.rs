//! The game state engine.
//!
//! ## Flow
//!
//! 1. `GameState::initialize` deals a shuffled, paired deck
//! 2. The presenter calls `select_card` for each tap, passing its `Scheduler`
//! 3. When a scheduled timer fires, the presenter calls `apply_flip_back`
//! 4. `reset` re-deals and invalidates every outstanding flip-back

mod event;
mod select;
mod snapshot;
mod state;
mod timer;

pub use event::{FlipBackResult, GameEvent, IgnoreReason, MatchEvent, SelectOutcome};
pub use snapshot::{CardView, Snapshot};
pub use state::{GameState, HISTORY_LIMIT};
pub use timer::{FlipBack, FlipTarget, Scheduler, SessionToken, TimerHandle, TimerQueue};
