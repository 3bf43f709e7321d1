//! Selection and flip-back transitions.
//!
//! Per card: `Hidden -> Flipped -> Matched` (terminal), or
//! `Flipped -> Hidden` once a flip-back is applied.

use smallvec::SmallVec;

use super::event::{FlipBackResult, GameEvent, IgnoreReason, MatchEvent, SelectOutcome};
use super::state::GameState;
use super::timer::{FlipBack, FlipTarget, Scheduler};
use crate::core::{EngineError, EngineResult};

impl GameState {
    /// Process a tap on the card at `index`.
    ///
    /// - matched card, or the pending card again: ignored
    /// - no pending card: the card turns face-up and becomes pending
    /// - pending card with the same symbol: both become matched
    /// - pending card with another symbol: both stay face-up, the selection
    ///   clears, and a flip-back is handed to `scheduler`
    ///
    /// Fails with `IndexOutOfBounds` without touching the state.
    pub fn select_card<S>(&mut self, index: usize, scheduler: &mut S) -> EngineResult<SelectOutcome>
    where
        S: Scheduler + ?Sized,
    {
        let card = self.deck.get(index).ok_or(EngineError::IndexOutOfBounds {
            index,
            len: self.deck.len(),
        })?;

        if card.matched {
            return Ok(SelectOutcome::Ignored(IgnoreReason::AlreadyMatched));
        }
        if self.pending == Some(index) {
            return Ok(SelectOutcome::Ignored(IgnoreReason::AlreadyPending));
        }

        let symbol = card.symbol;
        self.reveal_counter += 1;
        let stamp = self.reveal_counter;
        self.deck.card_mut(index).turn_up(stamp);
        self.record(GameEvent::Revealed { index, symbol });

        let Some(first) = self.pending.take() else {
            self.pending = Some(index);
            return Ok(SelectOutcome::Revealed { index });
        };

        if self.deck[first].symbol == symbol {
            self.deck.card_mut(first).mark_matched();
            self.deck.card_mut(index).mark_matched();
            self.matched_pairs += 1;
            self.record(GameEvent::Matched {
                first,
                second: index,
                symbol,
            });

            let complete = self.is_complete();
            if complete {
                self.record(GameEvent::Completed {
                    session: self.session,
                });
            }

            return Ok(SelectOutcome::Matched(MatchEvent {
                symbol,
                cards: [first, index],
                matched_pairs: self.matched_pairs,
                complete,
            }));
        }

        let flip_back = FlipBack::pair(
            self.session,
            FlipTarget {
                index: first,
                reveal: self.deck[first].reveal,
            },
            FlipTarget {
                index,
                reveal: stamp,
            },
        );
        let handle = scheduler.schedule_after(self.config.flip_back_delay, flip_back);
        self.record(GameEvent::Mismatched {
            first,
            second: index,
            handle,
        });

        Ok(SelectOutcome::Mismatched {
            first,
            second: index,
            handle,
        })
    }

    /// Apply a flip-back whose delay has elapsed.
    ///
    /// Tokens from another session are dropped whole and leave no history.
    /// Otherwise the decision is made per card: each target is turned down
    /// unless it was matched or revealed again after the token was issued, so
    /// one card of the pair being matched never keeps its partner face-up.
    pub fn apply_flip_back(&mut self, flip_back: &FlipBack) -> FlipBackResult {
        if flip_back.session != self.session {
            return FlipBackResult::Stale;
        }

        let mut hidden: SmallVec<[usize; 2]> = SmallVec::new();
        for target in &flip_back.targets {
            let Some(card) = self.deck.get_mut(target.index) else {
                continue;
            };
            if card.is_exposed() && card.reveal == target.reveal {
                card.turn_down();
                hidden.push(target.index);
            }
        }

        if !hidden.is_empty() {
            self.record(GameEvent::FlippedBack {
                indices: hidden.clone(),
            });
        }
        FlipBackResult::Applied { hidden }
    }
}
