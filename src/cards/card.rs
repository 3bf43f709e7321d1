//! Card instances.
//!
//! A `Card` is one physical card on the table. Two cards share each symbol
//! but every card has its own `CardId`.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Unique identity of a card within a deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card on the table.
///
/// `matched` implies `face_up`; the engine never hides a matched card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Identity of this instance.
    pub id: CardId,

    /// The face. Shared with exactly one other card in the deck.
    pub symbol: Symbol,

    /// Is the face currently visible?
    pub face_up: bool,

    /// Has this card been paired with its partner?
    pub matched: bool,

    /// Stamp of the selection that last turned this card face-up.
    /// Zero until the first reveal.
    pub reveal: u64,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
            reveal: 0,
        }
    }

    /// Face-up but not yet part of a pair.
    #[must_use]
    pub fn is_exposed(&self) -> bool {
        self.face_up && !self.matched
    }

    /// The symbol, if the face is visible.
    #[must_use]
    pub fn visible_symbol(&self) -> Option<Symbol> {
        self.face_up.then_some(self.symbol)
    }

    pub(crate) fn turn_up(&mut self, stamp: u64) {
        self.face_up = true;
        self.reveal = stamp;
    }

    pub(crate) fn turn_down(&mut self) {
        debug_assert!(!self.matched, "matched cards stay face-up");
        self.face_up = false;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }
}
