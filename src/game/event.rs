//! Outcomes and history records.
//!
//! `SelectOutcome` is what a single selection returns to the caller.
//! `GameEvent` is the per-session trace kept in `GameState::history`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::timer::{SessionToken, TimerHandle};
use crate::cards::Symbol;

/// A pair was found. Purely observational: presenters use it to celebrate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    /// The shared symbol.
    pub symbol: Symbol,
    /// Deck positions of the pair, in selection order.
    pub cards: [usize; 2],
    /// Pairs found so far, including this one.
    pub matched_pairs: usize,
    /// Did this pair finish the game?
    pub complete: bool,
}

/// Why a selection changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The card is already part of a found pair.
    AlreadyMatched,
    /// The card is the one waiting for a partner.
    AlreadyPending,
}

/// Result of [`GameState::select_card`](crate::GameState::select_card).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// No-op selection.
    Ignored(IgnoreReason),

    /// First card of a comparison turned face-up.
    Revealed {
        /// Deck position now pending.
        index: usize,
    },

    /// Second card matched the pending one.
    Matched(MatchEvent),

    /// Second card did not match; a flip-back was scheduled.
    Mismatched {
        /// Pending card of the comparison.
        first: usize,
        /// Card just selected.
        second: usize,
        /// Timer returned by the scheduler.
        handle: TimerHandle,
    },
}

impl SelectOutcome {
    /// The match side effect, if this selection found a pair.
    #[must_use]
    pub fn match_event(&self) -> Option<&MatchEvent> {
        match self {
            SelectOutcome::Matched(event) => Some(event),
            _ => None,
        }
    }

    /// Check if the selection changed nothing.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }
}

/// Result of applying a flip-back token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipBackResult {
    /// Token from the current session. `hidden` lists the cards actually
    /// turned down; cards matched or re-revealed since were left alone.
    Applied {
        hidden: SmallVec<[usize; 2]>,
    },
    /// Token from an earlier session; nothing touched.
    Stale,
}

/// Entry in a session's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh deal.
    Started {
        session: SessionToken,
        card_count: usize,
    },
    /// A card turned face-up by a selection.
    Revealed { index: usize, symbol: Symbol },
    /// A pair was found.
    Matched {
        first: usize,
        second: usize,
        symbol: Symbol,
    },
    /// A comparison failed and a flip-back was scheduled.
    Mismatched {
        first: usize,
        second: usize,
        handle: TimerHandle,
    },
    /// A flip-back turned cards down.
    FlippedBack { indices: SmallVec<[usize; 2]> },
    /// Every pair has been found.
    Completed { session: SessionToken },
}
