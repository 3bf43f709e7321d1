//! The deck: every card on the table, in layout order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::symbol::Symbol;
use crate::core::GameRng;

/// Ordered cards of one deal. Position `i` is the `i`-th slot in the grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal two cards per symbol and shuffle them.
    ///
    /// Card IDs are assigned before shuffling: the pair for `symbols[i]` gets
    /// IDs `2i` and `2i + 1`.
    #[must_use]
    pub fn deal(symbols: &[Symbol], rng: &mut GameRng) -> Self {
        let mut cards = Vec::with_capacity(symbols.len() * 2);
        for (i, &symbol) in symbols.iter().enumerate() {
            let base = (i * 2) as u32;
            cards.push(Card::new(CardId(base), symbol));
            cards.push(Card::new(CardId(base + 1), symbol));
        }
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get the card at a position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Panics if `index` is out of range; callers check bounds first.
    pub(crate) fn card_mut(&mut self, index: usize) -> &mut Card {
        &mut self.cards[index]
    }

    /// All cards in layout order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over cards in layout order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Position of the other card carrying the same symbol.
    #[must_use]
    pub fn partner_of(&self, index: usize) -> Option<usize> {
        let symbol = self.cards.get(index)?.symbol;
        self.cards
            .iter()
            .enumerate()
            .find(|(i, card)| *i != index && card.symbol == symbol)
            .map(|(i, _)| i)
    }

    /// Check that every symbol appears exactly twice.
    #[must_use]
    pub fn is_paired(&self) -> bool {
        let mut counts: FxHashMap<Symbol, usize> = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        counts.values().all(|&n| n == 2)
    }
}

impl std::ops::Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
