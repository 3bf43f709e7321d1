//! Symbols and the sources that supply them.
//!
//! A `Symbol` is the face of a card and identifies a pair. The engine never
//! interprets it beyond equality; labels for display live in a
//! [`SymbolPalette`].

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Opaque card face. Two cards with equal symbols form a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub u32);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Supplies the distinct symbols a game is dealt from.
///
/// `draw` should return `count` distinct symbols. Returning fewer, or
/// repeating one, makes game initialization fail with
/// `InvalidConfiguration`.
pub trait SymbolSource {
    /// Draw `count` distinct symbols.
    fn draw(&mut self, count: usize, rng: &mut GameRng) -> Vec<Symbol>;
}

/// Symbols `0..count`, in order.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialSymbols;

impl SymbolSource for SequentialSymbols {
    fn draw(&mut self, count: usize, _rng: &mut GameRng) -> Vec<Symbol> {
        (0..count as u32).map(Symbol).collect()
    }
}

/// A fixed list of symbols, taken from the front.
impl SymbolSource for [Symbol] {
    fn draw(&mut self, count: usize, _rng: &mut GameRng) -> Vec<Symbol> {
        self.iter().take(count).copied().collect()
    }
}

impl SymbolSource for Vec<Symbol> {
    fn draw(&mut self, count: usize, rng: &mut GameRng) -> Vec<Symbol> {
        self.as_mut_slice().draw(count, rng)
    }
}

/// Labels shown by the default palette: the classic animal set.
pub const ANIMAL_LABELS: [&str; 8] = ["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼"];

/// Display labels indexed by symbol.
///
/// Drawing picks a random subset of the labels, so a game smaller than the
/// palette gets a different mix of faces each deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolPalette {
    labels: Vec<String>,
}

impl Default for SymbolPalette {
    fn default() -> Self {
        Self::new(ANIMAL_LABELS)
    }
}

impl SymbolPalette {
    /// Create a palette from display labels. `Symbol(i)` shows `labels[i]`.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the palette has no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Display label for a symbol, if it belongs to this palette.
    #[must_use]
    pub fn label(&self, symbol: Symbol) -> Option<&str> {
        self.labels.get(symbol.0 as usize).map(String::as_str)
    }
}

impl SymbolSource for SymbolPalette {
    fn draw(&mut self, count: usize, rng: &mut GameRng) -> Vec<Symbol> {
        let mut all: Vec<Symbol> = (0..self.labels.len() as u32).map(Symbol).collect();
        rng.shuffle(&mut all);
        all.truncate(count);
        all
    }
}
