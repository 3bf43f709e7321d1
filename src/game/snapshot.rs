//! Read-only views handed to presenters.

use serde::{Deserialize, Serialize};

use super::timer::SessionToken;
use crate::cards::{Card, CardId, Symbol};

/// What a presenter may know about one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    /// `None` while the card is face-down.
    pub symbol: Option<Symbol>,
    pub face_up: bool,
    pub matched: bool,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            symbol: card.visible_symbol(),
            face_up: card.face_up,
            matched: card.matched,
        }
    }
}

/// Whole-table view at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cards in layout order.
    pub cards: Vec<CardView>,
    pub matched_pairs: usize,
    pub palette_size: usize,
    pub complete: bool,
    pub pending: Option<usize>,
    pub session: SessionToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_view_hides_face_down_symbol() {
        let card = Card::new(CardId(1), Symbol(4));
        let view = CardView::from(&card);
        assert_eq!(view.symbol, None);
        assert!(!view.face_up);

        let mut card = card;
        card.turn_up(1);
        let view = CardView::from(&card);
        assert_eq!(view.symbol, Some(Symbol(4)));
        assert!(view.face_up);
        assert!(!view.matched);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = Snapshot {
            cards: vec![CardView {
                id: CardId(0),
                symbol: Some(Symbol(1)),
                face_up: true,
                matched: true,
            }],
            matched_pairs: 1,
            palette_size: 1,
            complete: true,
            pending: None,
            session: SessionToken(2),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
