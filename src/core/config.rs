//! Game configuration.
//!
//! A `GameConfig` fixes everything a reset must reproduce: how many pairs
//! are dealt, how long a mismatched pair stays visible, and the RNG seed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Number of distinct pairs in a default game (16 cards).
pub const DEFAULT_PALETTE_SIZE: usize = 8;

/// Columns in the default 4x4 layout.
pub const DEFAULT_GRID_COLUMNS: usize = 4;

/// How long a mismatched pair stays face-up before flipping back.
pub const DEFAULT_FLIP_BACK_DELAY: Duration = Duration::from_secs(1);

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of distinct symbols (pairs). The deck holds twice as many cards.
    pub palette_size: usize,

    /// Delay before a mismatched pair is turned face-down again.
    pub flip_back_delay: Duration,

    /// Columns used by [`grid_position`](crate::GameState::grid_position).
    pub grid_columns: usize,

    /// Seed for deck shuffling. Same seed, same sequence of deals. Drawn
    /// from entropy by default; set it with [`with_seed`](Self::with_seed)
    /// for a reproducible game.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            palette_size: DEFAULT_PALETTE_SIZE,
            flip_back_delay: DEFAULT_FLIP_BACK_DELAY,
            grid_columns: DEFAULT_GRID_COLUMNS,
            seed: rand::random(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given number of pairs.
    pub fn new(palette_size: usize) -> Self {
        Self {
            palette_size,
            ..Self::default()
        }
    }

    /// Set the flip-back delay.
    #[must_use]
    pub fn with_flip_back_delay(mut self, delay: Duration) -> Self {
        self.flip_back_delay = delay;
        self
    }

    /// Set the number of grid columns.
    #[must_use]
    pub fn with_grid_columns(mut self, columns: usize) -> Self {
        self.grid_columns = columns;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of cards dealt with this configuration.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.palette_size * 2
    }

    /// Check the configuration can produce a game.
    pub fn validate(&self) -> EngineResult<()> {
        if self.palette_size == 0 {
            return Err(EngineError::invalid_config(
                "palette size must be at least 1",
            ));
        }
        if self.grid_columns == 0 {
            return Err(EngineError::invalid_config(
                "grid must have at least one column",
            ));
        }
        Ok(())
    }
}
