//! Deferred flip-back scheduling.
//!
//! The engine never owns a clock. When a pair mismatches it hands a
//! [`FlipBack`] token to a [`Scheduler`] supplied by the caller; once the
//! delay elapses the caller passes the token back to
//! [`GameState::apply_flip_back`](crate::GameState::apply_flip_back).
//!
//! Tokens go stale on their own. Every deal gets a new [`SessionToken`], and
//! every reveal restamps the card, so an old token can only touch cards that
//! are still in the exact state it was issued for.
//!
//! [`TimerQueue`] is a ready-made scheduler on a virtual clock: a UI loop
//! feeds it elapsed frame time, tests feed it exact durations.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::event::FlipBackResult;
use super::state::GameState;

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// Generation marker for one deal. Every initialize and reset takes a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionToken(pub u64);

impl SessionToken {
    /// A token no other deal in this process has been given.
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_SESSION.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// One card a flip-back should turn down, with the reveal stamp it had when
/// the mismatch happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlipTarget {
    /// Deck position.
    pub index: usize,
    /// `Card::reveal` at scheduling time.
    pub reveal: u64,
}

/// Deferred "turn these cards face-down" request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlipBack {
    /// Session the mismatch happened in.
    pub session: SessionToken,
    /// The mismatched cards. Always two for engine-issued tokens.
    pub targets: SmallVec<[FlipTarget; 2]>,
}

impl FlipBack {
    /// Create a flip-back for a mismatched pair.
    #[must_use]
    pub fn pair(session: SessionToken, first: FlipTarget, second: FlipTarget) -> Self {
        let mut targets: SmallVec<[FlipTarget; 2]> = SmallVec::new();
        targets.push(first);
        targets.push(second);
        Self { session, targets }
    }

    /// Deck positions this flip-back may touch.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.targets.iter().map(|t| t.index)
    }
}

/// Handle returned by a scheduler, usable to cancel a pending timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

/// Timer collaborator provided by the presentation layer.
///
/// Implementations must deliver the token back to the game no earlier than
/// `delay` after `schedule_after` returns. They never need to check the
/// token: stale tokens are rejected by the game itself.
pub trait Scheduler {
    /// Request that `flip_back` be applied after `delay`.
    fn schedule_after(&mut self, delay: Duration, flip_back: FlipBack) -> TimerHandle;

    /// Cancel a pending timer. Returns `false` if it already fired or is unknown.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}

/// Deterministic scheduler on a virtual clock.
///
/// Timers due at the same instant fire in scheduling order.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_handle: u64,
    pending: BTreeMap<(Duration, TimerHandle), FlipBack>,
    due_at: FxHashMap<TimerHandle, Duration>,
}

impl TimerQueue {
    /// Create an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that have not fired.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// When the earliest pending timer fires.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    /// Advance the clock and return every token that became due, in order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<FlipBack> {
        self.now += elapsed;

        let mut fired = Vec::new();
        while let Some(entry) = self.pending.first_entry() {
            if entry.key().0 > self.now {
                break;
            }
            let ((_, handle), flip_back) = entry.remove_entry();
            self.due_at.remove(&handle);
            fired.push(flip_back);
        }
        fired
    }

    /// Advance the clock and apply every due token to `state`.
    pub fn run_due(&mut self, state: &mut GameState, elapsed: Duration) -> Vec<FlipBackResult> {
        self.advance(elapsed)
            .iter()
            .map(|flip_back| state.apply_flip_back(flip_back))
            .collect()
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.due_at.clear();
    }
}

impl Scheduler for TimerQueue {
    fn schedule_after(&mut self, delay: Duration, flip_back: FlipBack) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;

        let due = self.now + delay;
        self.pending.insert((due, handle), flip_back);
        self.due_at.insert(handle, due);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.due_at.remove(&handle) {
            Some(due) => self.pending.remove(&(due, handle)).is_some(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(session: u64, a: usize, b: usize) -> FlipBack {
        FlipBack::pair(
            SessionToken(session),
            FlipTarget { index: a, reveal: 1 },
            FlipTarget { index: b, reveal: 2 },
        )
    }

    #[test]
    fn test_fresh_session_tokens_are_unique() {
        let a = SessionToken::fresh();
        let b = SessionToken::fresh();
        assert_ne!(a, b);
        assert!(b > a);
        assert_ne!(a, SessionToken(0));
        assert_eq!(format!("{}", SessionToken(3)), "Session(3)");
    }

    #[test]
    fn test_flip_back_indices() {
        let flip = token(0, 4, 9);
        assert_eq!(flip.indices().collect::<Vec<_>>(), vec![4, 9]);
    }

    #[test]
    fn test_fires_only_when_due() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(Duration::from_secs(1), token(0, 0, 1));

        assert!(queue.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(queue.len(), 1);

        let fired = queue.advance(Duration::from_millis(1));
        assert_eq!(fired, vec![token(0, 0, 1)]);
        assert!(queue.is_empty());
        assert_eq!(queue.now(), Duration::from_secs(1));
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(Duration::from_secs(2), token(0, 2, 3));
        queue.schedule_after(Duration::from_secs(1), token(0, 0, 1));
        queue.schedule_after(Duration::from_secs(1), token(0, 4, 5));

        assert_eq!(queue.next_due(), Some(Duration::from_secs(1)));

        let fired = queue.advance(Duration::from_secs(5));
        assert_eq!(fired, vec![token(0, 0, 1), token(0, 4, 5), token(0, 2, 3)]);
    }

    #[test]
    fn test_cancel() {
        let mut queue = TimerQueue::new();
        let keep = queue.schedule_after(Duration::from_secs(1), token(0, 0, 1));
        let drop = queue.schedule_after(Duration::from_secs(1), token(0, 2, 3));
        assert_ne!(keep, drop);

        assert!(queue.cancel(drop));
        assert!(!queue.cancel(drop));

        let fired = queue.advance(Duration::from_secs(1));
        assert_eq!(fired, vec![token(0, 0, 1)]);
        assert!(!queue.cancel(keep));
    }

    #[test]
    fn test_clear() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(Duration::from_secs(1), token(0, 0, 1));
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.next_due(), None);
        assert!(queue.advance(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn test_flip_back_serde() {
        let flip = token(3, 1, 6);
        let json = serde_json::to_string(&flip).unwrap();
        let deserialized: FlipBack = serde_json::from_str(&json).unwrap();
        assert_eq!(flip, deserialized);
    }
}
