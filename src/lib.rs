//! # memory-pairs
//!
//! Game state engine for a single-player memory game: a grid of face-down
//! cards, two per symbol. The player turns two cards at a time; pairs stay
//! face-up, mismatches turn back over after a delay.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: All game data lives in `GameState`. Presenters
//!    render from `Snapshot`s and never mutate cards directly.
//!
//! 2. **No Clock**: The engine asks a caller-supplied `Scheduler` for the
//!    mismatch flip-back and is handed the token back when it fires.
//!
//! 3. **Stale Tokens Are Harmless**: Flip-backs carry the session they were
//!    issued in and the reveal stamp of each card, so a reset or a fresh
//!    reveal silently invalidates them.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, deterministic RNG
//! - `cards`: Symbols, cards, deck
//! - `game`: State, selection transitions, timers, snapshots
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_pairs::{GameConfig, GameState, SequentialSymbols, TimerQueue};
//!
//! let mut state = GameState::initialize(GameConfig::new(4), &mut SequentialSymbols).unwrap();
//! let mut timers = TimerQueue::new();
//!
//! let partner = state.partner_of(0).unwrap();
//! state.select_card(0, &mut timers).unwrap();
//! let outcome = state.select_card(partner, &mut timers).unwrap();
//!
//! assert!(outcome.match_event().is_some());
//! assert_eq!(state.matched_pairs(), 1);
//!
//! // Nothing was scheduled, so advancing time changes nothing.
//! assert!(timers.run_due(&mut state, Duration::from_secs(1)).is_empty());
//! ```

pub mod cards;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    EngineError, EngineResult, GameConfig, GameRng, GameRngState,
    DEFAULT_FLIP_BACK_DELAY, DEFAULT_GRID_COLUMNS, DEFAULT_PALETTE_SIZE,
};

pub use crate::cards::{
    Card, CardId, Deck, SequentialSymbols, Symbol, SymbolPalette, SymbolSource,
};

pub use crate::game::{
    CardView, FlipBack, FlipBackResult, FlipTarget, GameEvent, GameState, IgnoreReason,
    MatchEvent, Scheduler, SelectOutcome, SessionToken, Snapshot, TimerHandle, TimerQueue,
    HISTORY_LIMIT,
};
