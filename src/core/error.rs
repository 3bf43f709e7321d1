//! Engine error types.
//!
//! Only malformed input is an error. Game-logic anomalies such as
//! re-selecting a matched card are reported as ignored selections instead.

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The game cannot be built from the given configuration.
    InvalidConfiguration {
        /// What was wrong with it.
        reason: String,
    },

    /// A selection index outside the deck.
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Number of cards in the deck.
        len: usize,
    },
}

impl EngineError {
    /// Create an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidConfiguration { reason } => {
                write!(f, "invalid configuration: {}", reason)
            }
            EngineError::IndexOutOfBounds { index, len } => {
                write!(f, "card index {} out of bounds (deck has {} cards)", index, len)
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
