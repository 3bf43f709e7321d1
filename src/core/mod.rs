//! Core building blocks: configuration, errors, RNG.
//!
//! Nothing here knows about cards or timers.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, DEFAULT_FLIP_BACK_DELAY, DEFAULT_GRID_COLUMNS, DEFAULT_PALETTE_SIZE};
pub use error::{EngineError, EngineResult};
pub use rng::{GameRng, GameRngState};
