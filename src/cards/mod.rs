//! Cards, symbols, and the deck.
//!
//! ## Key Types
//!
//! - `Symbol`: Opaque face value; equal symbols form a pair
//! - `SymbolSource`: Supplies the distinct symbols for a deal
//! - `SymbolPalette`: Display labels, doubles as a random source
//! - `Card`: One card on the table (face-up / matched flags)
//! - `Deck`: Shuffled, paired sequence of cards

pub mod card;
pub mod deck;
pub mod symbol;

pub use card::{Card, CardId};
pub use deck::Deck;
pub use symbol::{SequentialSymbols, Symbol, SymbolPalette, SymbolSource, ANIMAL_LABELS};
