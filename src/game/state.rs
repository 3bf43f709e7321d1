//! Game state for one table.
//!
//! `GameState` owns the deck, the pending selection and match bookkeeping.
//! Transitions live in `select.rs`; this file covers construction, reset
//! and read-only queries.
//!
//! ## Invariants
//!
//! - `matched_pairs <= palette_size`
//! - a matched card is always face-up
//! - every symbol appears on exactly two cards
//! - face-up unmatched cards not awaiting a flip-back: exactly one when a
//!   selection is pending, none otherwise

use im::Vector;
use rustc_hash::FxHashSet;

use super::event::GameEvent;
use super::snapshot::{CardView, Snapshot};
use super::timer::SessionToken;
use crate::cards::{Card, Deck, Symbol, SymbolSource};
use crate::core::{EngineError, EngineResult, GameConfig, GameRng, GameRngState};

/// Most events kept in [`GameState::history`]. Older ones are dropped first.
pub const HISTORY_LIMIT: usize = 256;

/// Complete state of a game.
///
/// Cloning is cheap enough to snapshot every frame: the history is an
/// `im::Vector`.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(super) config: GameConfig,

    /// Symbols dealt each session, drawn once at initialization.
    pub(super) symbols: Vec<Symbol>,

    pub(super) deck: Deck,

    /// First card of the comparison in progress.
    pub(super) pending: Option<usize>,

    pub(super) matched_pairs: usize,

    pub(super) session: SessionToken,

    /// Last stamp handed to a revealed card.
    pub(super) reveal_counter: u64,

    pub(super) rng: GameRng,

    pub(super) history: Vector<GameEvent>,
}

impl GameState {
    /// Deal a new game.
    ///
    /// Draws `config.palette_size` symbols from `source`, deals two cards per
    /// symbol and shuffles them. Fails with `InvalidConfiguration` if the
    /// palette size is zero or the source does not yield enough distinct
    /// symbols.
    pub fn initialize<S>(config: GameConfig, source: &mut S) -> EngineResult<Self>
    where
        S: SymbolSource + ?Sized,
    {
        config.validate()?;

        let mut rng = GameRng::new(config.seed);
        let symbols = source.draw(config.palette_size, &mut rng);
        if symbols.len() != config.palette_size {
            return Err(EngineError::invalid_config(format!(
                "symbol source yielded {} symbols, palette needs {}",
                symbols.len(),
                config.palette_size
            )));
        }
        let mut seen = FxHashSet::default();
        if let Some(dup) = symbols.iter().find(|s| !seen.insert(**s)) {
            return Err(EngineError::invalid_config(format!(
                "symbol source repeated {}",
                dup
            )));
        }

        let deck = Deck::deal(&symbols, &mut rng);
        let mut state = Self {
            config,
            symbols,
            deck,
            pending: None,
            matched_pairs: 0,
            session: SessionToken::fresh(),
            reveal_counter: 0,
            rng,
            history: Vector::new(),
        };
        state.record_start();
        Ok(state)
    }

    /// Re-deal with the same configuration and symbols.
    ///
    /// All flip and match state is discarded and the game takes a fresh
    /// session, so flip-backs scheduled before the reset no longer apply.
    pub fn reset(&mut self) {
        self.deck = Deck::deal(&self.symbols, &mut self.rng);
        self.pending = None;
        self.matched_pairs = 0;
        self.session = SessionToken::fresh();
        self.history.clear();
        self.record_start();
    }

    fn record_start(&mut self) {
        self.record(GameEvent::Started {
            session: self.session,
            card_count: self.deck.len(),
        });
    }

    pub(super) fn record(&mut self, event: GameEvent) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(event);
    }

    // === Queries ===

    /// The configuration this game was built from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of distinct pairs.
    #[must_use]
    pub fn palette_size(&self) -> usize {
        self.config.palette_size
    }

    /// The symbols in play, in draw order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The deck in layout order.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// All cards in layout order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    /// The card at a position.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.deck.get(index)
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// Always false for an initialized game.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Position of the card waiting for a partner.
    #[must_use]
    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    /// Pairs found this session.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Current session token.
    #[must_use]
    pub fn session(&self) -> SessionToken {
        self.session
    }

    /// Check if every pair has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.config.palette_size
    }

    /// Symbols of the matched cards, one entry per card, in layout order.
    ///
    /// Drives the celebration list.
    #[must_use]
    pub fn matched_symbols(&self) -> Vec<Symbol> {
        self.deck
            .iter()
            .filter(|card| card.matched)
            .map(|card| card.symbol)
            .collect()
    }

    /// Positions of cards that are face-up but not matched.
    ///
    /// Includes the pending card and any mismatched pair waiting to flip back.
    #[must_use]
    pub fn face_up_unmatched(&self) -> Vec<usize> {
        self.deck
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_exposed())
            .map(|(i, _)| i)
            .collect()
    }

    /// Position of the card carrying the same symbol.
    #[must_use]
    pub fn partner_of(&self, index: usize) -> Option<usize> {
        self.deck.partner_of(index)
    }

    /// `(row, column)` of a card in the configured grid.
    #[must_use]
    pub fn grid_position(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.deck.len() {
            return None;
        }
        let columns = self.config.grid_columns;
        Some((index / columns, index % columns))
    }

    /// Events recorded since the last deal, at most [`HISTORY_LIMIT`] of the
    /// latest.
    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    /// Shuffle stream position, for reproducing later deals.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Read-only view for presenters. Hidden cards do not expose their symbol.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cards: self.deck.iter().map(CardView::from).collect(),
            matched_pairs: self.matched_pairs,
            palette_size: self.config.palette_size,
            complete: self.is_complete(),
            pending: self.pending,
            session: self.session,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{SequentialSymbols, SymbolPalette};

    fn new_game(pairs: usize) -> GameState {
        GameState::initialize(GameConfig::new(pairs), &mut SequentialSymbols).unwrap()
    }

    #[test]
    fn test_initialize() {
        let state = new_game(4);

        assert_eq!(state.len(), 8);
        assert_eq!(state.palette_size(), 4);
        assert_eq!(state.matched_pairs(), 0);
        assert_eq!(state.pending(), None);
        assert_ne!(state.session(), new_game(4).session());
        assert!(state.deck().is_paired());
        assert!(state.cards().iter().all(|c| !c.face_up && !c.matched));
        assert!(!state.is_complete());
        assert!(!state.is_empty());
    }

    #[test]
    fn test_initialize_zero_palette() {
        let result = GameState::initialize(GameConfig::new(0), &mut SequentialSymbols);
        assert!(matches!(result, Err(EngineError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_initialize_short_source() {
        let mut palette = SymbolPalette::new(["A", "B", "C"]);
        let result = GameState::initialize(GameConfig::new(4), &mut palette);
        assert!(matches!(result, Err(EngineError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_initialize_duplicate_symbols() {
        let mut source = vec![Symbol(1), Symbol(2), Symbol(1)];
        let result = GameState::initialize(GameConfig::new(3), &mut source);
        assert!(matches!(result, Err(EngineError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_default_palette_game() {
        let mut palette = SymbolPalette::default();
        let state = GameState::initialize(GameConfig::default(), &mut palette).unwrap();

        assert_eq!(state.len(), 16);
        for card in state.cards() {
            assert!(palette.label(card.symbol).is_some());
        }
    }

    #[test]
    fn test_reset_advances_session() {
        let mut state = new_game(4);
        let symbols = state.symbols().to_vec();

        let before = state.session();

        state.reset();

        let session = state.session();
        assert!(session > before);
        assert_eq!(state.len(), 8);
        assert_eq!(state.symbols(), symbols.as_slice());
        assert_eq!(state.history().len(), 1);
        assert_eq!(
            state.history()[0],
            GameEvent::Started { session, card_count: 8 }
        );
    }

    #[test]
    fn test_same_seed_same_deal() {
        let seeded = |seed| {
            GameState::initialize(GameConfig::new(8).with_seed(seed), &mut SequentialSymbols)
                .unwrap()
        };
        let a = seeded(42);
        let b = seeded(42);
        assert_eq!(a.deck(), b.deck());
        assert_ne!(a.session(), b.session());

        let c = seeded(7);
        assert_ne!(a.deck(), c.deck());
    }

    #[test]
    fn test_default_seed_varies() {
        let decks: Vec<Deck> = (0..4).map(|_| new_game(8).deck().clone()).collect();
        assert!(decks.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_history_is_capped() {
        let mut state = new_game(2);
        let revealed = GameEvent::Revealed { index: 0, symbol: state.cards()[0].symbol };
        for _ in 0..HISTORY_LIMIT + 10 {
            state.record(revealed.clone());
        }

        // The Started record was the oldest, so it went first.
        assert_eq!(state.history().len(), HISTORY_LIMIT);
        assert!(state.history().iter().all(|e| *e == revealed));
    }

    #[test]
    fn test_grid_position() {
        let state = new_game(8);
        assert_eq!(state.grid_position(0), Some((0, 0)));
        assert_eq!(state.grid_position(5), Some((1, 1)));
        assert_eq!(state.grid_position(15), Some((3, 3)));
        assert_eq!(state.grid_position(16), None);
    }

    #[test]
    fn test_snapshot_hides_symbols() {
        let state = new_game(2);
        let snapshot = state.snapshot();

        assert_eq!(snapshot.cards.len(), 4);
        assert!(snapshot.cards.iter().all(|c| c.symbol.is_none()));
        assert_eq!(snapshot.palette_size, 2);
        assert!(!snapshot.complete);
    }
}
