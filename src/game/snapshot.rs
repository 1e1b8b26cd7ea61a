//! Read-only, serializable view of a session for rendering.
//!
//! Face-down cards are reported without their value, so a snapshot can be
//! handed to a client without leaking the layout.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::{Card, CardFace, CardId, Symbol};
use crate::core::phase::GamePhase;
use crate::score::ScoreState;

/// One card as the player can see it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub face: CardFace,
    /// `None` while the card is face-down.
    pub value: Option<Symbol>,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            face: card.face,
            value: card.face.is_revealed().then(|| card.value.clone()),
        }
    }
}

/// Everything a UI needs to draw a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub generation: u64,
    pub phase: GamePhase,
    pub cards: Vec<CardView>,
    pub selection: Vec<CardId>,
    pub score: ScoreState,
    pub total_pairs: usize,
}

impl SessionSnapshot {
    pub(crate) fn capture(
        generation: u64,
        phase: GamePhase,
        board: Option<&Board>,
        selection: &[CardId],
        score: ScoreState,
    ) -> Self {
        let cards = board
            .map(|b| b.cards().iter().map(CardView::from).collect())
            .unwrap_or_default();
        Self {
            generation,
            phase,
            cards,
            selection: selection.to_vec(),
            score,
            total_pairs: board.map_or(0, Board::pair_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_view_hides_down_values() {
        let mut card = Card::new(CardId::new(2), Symbol::from("A"));
        assert_eq!(CardView::from(&card).value, None);

        card.face = CardFace::Up;
        assert_eq!(CardView::from(&card).value, Some(Symbol::from("A")));

        card.face = CardFace::Matched;
        assert_eq!(CardView::from(&card).value, Some(Symbol::from("A")));
    }

    #[test]
    fn test_capture_without_board() {
        let snapshot = SessionSnapshot::capture(0, GamePhase::Idle, None, &[], ScoreState::default());
        assert!(snapshot.cards.is_empty());
        assert_eq!(snapshot.total_pairs, 0);
    }
}
