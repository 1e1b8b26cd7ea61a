//! The board: the dealt cards of one game and their face states.
//!
//! The board enforces the per-card rules (only Down cards flip up, only Up
//! cards flip back, only an Up pair with equal values can be matched). It
//! knows nothing about turns or phases; that is the session's job.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardFace, CardId, Symbol};
use crate::core::error::{InvalidBoardError, InvalidMoveError};
use crate::core::rng::{GameRng, ShuffleStrategy};

/// Ordered cards for one game.
///
/// ## Usage
///
/// ```
/// use memory_match::board::Board;
/// use memory_match::cards::{CardFace, CardId, Symbol};
///
/// let values: Vec<Symbol> = ["A", "B", "A", "B"].into_iter().map(Symbol::from).collect();
/// let mut board = Board::new(values).unwrap();
///
/// board.flip(CardId::new(0)).unwrap();
/// board.flip(CardId::new(2)).unwrap();
/// board.mark_matched(CardId::new(0), CardId::new(2)).unwrap();
///
/// assert_eq!(board.card(CardId::new(0)).unwrap().face, CardFace::Matched);
/// assert_eq!(board.matched_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    cards: Vec<Card>,
}

/// Unchecked serialized form; becomes a `Board` only through `TryFrom`.
#[derive(Deserialize)]
struct BoardRepr {
    cards: Vec<Card>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = InvalidBoardError;

    /// Accepts a board saved mid-game, so faces may be Up or Matched, but
    /// ids must be positional, values paired, and matched pairs whole.
    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let BoardRepr { cards } = repr;
        if cards.is_empty() {
            return Err(InvalidBoardError::Empty);
        }

        if let Some((position, card)) = cards
            .iter()
            .enumerate()
            .find(|(idx, card)| card.id.index() != *idx)
        {
            return Err(InvalidBoardError::MisplacedCard { position, id: card.id });
        }

        let values: Vec<Symbol> = cards.iter().map(|c| c.value.clone()).collect();
        if let Some((value, count)) = first_unpaired(&values) {
            return Err(InvalidBoardError::WrongMultiplicity { value, count });
        }

        let half_matched = cards.iter().find(|card| {
            card.is_matched()
                && cards
                    .iter()
                    .any(|other| other.id != card.id && other.value == card.value && !other.is_matched())
        });
        if let Some(card) = half_matched {
            return Err(InvalidBoardError::HalfMatched { value: card.value.clone() });
        }

        Ok(Self { cards })
    }
}

impl Board {
    /// Lay out face-down cards with values taken positionally.
    ///
    /// Fails unless every value appears exactly twice.
    pub fn new(values: Vec<Symbol>) -> Result<Self, InvalidBoardError> {
        if values.is_empty() {
            return Err(InvalidBoardError::Empty);
        }

        if let Some((value, count)) = first_unpaired(&values) {
            return Err(InvalidBoardError::WrongMultiplicity { value, count });
        }

        let cards = values
            .into_iter()
            .enumerate()
            .map(|(idx, value)| Card::new(CardId::new(idx as u32), value))
            .collect();

        Ok(Self { cards })
    }

    /// Deal a fresh board: two copies of each palette value, shuffled.
    pub fn deal(
        palette: &[Symbol],
        rng: &mut GameRng,
        strategy: ShuffleStrategy,
    ) -> Result<Self, InvalidBoardError> {
        let mut values: Vec<Symbol> = palette.iter().chain(palette.iter()).cloned().collect();
        rng.shuffle(&mut values, strategy);
        Self::new(values)
    }

    /// Number of cards (N).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// A valid board is never empty; this exists for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs (M).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Look up a card.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the Matched state.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    /// Has every card been matched?
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Turn every card face-down, keeping values and positions.
    pub fn reset_faces(&mut self) {
        for card in &mut self.cards {
            card.face = CardFace::Down;
        }
    }

    /// Turn a Down card face-up.
    pub fn flip(&mut self, id: CardId) -> Result<&Card, InvalidMoveError> {
        let card = self.card_mut(id)?;
        if card.face != CardFace::Down {
            return Err(InvalidMoveError::CardNotDown { card: id, face: card.face });
        }
        card.face = CardFace::Up;
        Ok(&*card)
    }

    /// Turn an Up card back face-down.
    pub fn unflip(&mut self, id: CardId) -> Result<(), InvalidMoveError> {
        let card = self.card_mut(id)?;
        if card.face != CardFace::Up {
            return Err(InvalidMoveError::CardNotUp { card: id, face: card.face });
        }
        card.face = CardFace::Down;
        Ok(())
    }

    /// Mark two Up cards with equal values as a matched pair.
    ///
    /// Checks everything before touching either card.
    pub fn mark_matched(&mut self, first: CardId, second: CardId) -> Result<(), InvalidMoveError> {
        let a = self.up_card(first)?;
        let b = self.up_card(second)?;
        if first == second || a.value != b.value {
            return Err(InvalidMoveError::NotAPair { first, second });
        }

        self.cards[first.index()].face = CardFace::Matched;
        self.cards[second.index()].face = CardFace::Matched;
        Ok(())
    }

    fn up_card(&self, id: CardId) -> Result<&Card, InvalidMoveError> {
        let card = self.card(id).ok_or(InvalidMoveError::UnknownCard {
            card: id,
            board_len: self.cards.len(),
        })?;
        if !card.is_up() {
            return Err(InvalidMoveError::CardNotUp { card: id, face: card.face });
        }
        Ok(card)
    }

    fn card_mut(&mut self, id: CardId) -> Result<&mut Card, InvalidMoveError> {
        let board_len = self.cards.len();
        self.cards
            .get_mut(id.index())
            .ok_or(InvalidMoveError::UnknownCard { card: id, board_len })
    }
}

/// First value, in board order, that does not appear exactly twice.
fn first_unpaired(values: &[Symbol]) -> Option<(Symbol, usize)> {
    let mut counts: FxHashMap<&Symbol, usize> = FxHashMap::default();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    values
        .iter()
        .map(|value| (value, counts[value]))
        .find(|&(_, count)| count != 2)
        .map(|(value, count)| (value.clone(), count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(values: &[&str]) -> Vec<Symbol> {
        values.iter().copied().map(Symbol::from).collect()
    }

    fn abab() -> Board {
        Board::new(symbols(&["A", "B", "A", "B"])).unwrap()
    }

    #[test]
    fn test_new_board_all_down() {
        let board = abab();
        assert_eq!(board.len(), 4);
        assert_eq!(board.pair_count(), 2);
        assert!(board.cards().iter().all(Card::is_down));
        for (idx, card) in board.cards().iter().enumerate() {
            assert_eq!(card.id, CardId::new(idx as u32));
        }
        assert_eq!(board.card(CardId::new(1)).unwrap().value, Symbol::from("B"));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Board::new(vec![]), Err(InvalidBoardError::Empty));
    }

    #[test]
    fn test_rejects_single_and_triple() {
        let err = Board::new(symbols(&["A", "A", "B"])).unwrap_err();
        assert_eq!(
            err,
            InvalidBoardError::WrongMultiplicity {
                value: Symbol::from("B"),
                count: 1
            }
        );

        let err = Board::new(symbols(&["C", "C", "C", "D", "D"])).unwrap_err();
        assert_eq!(
            err,
            InvalidBoardError::WrongMultiplicity {
                value: Symbol::from("C"),
                count: 3
            }
        );
    }

    #[test]
    fn test_deal_doubles_palette() {
        let mut rng = GameRng::new(42);
        let palette = symbols(&["A", "B", "C"]);
        let board = Board::deal(&palette, &mut rng, ShuffleStrategy::FisherYates).unwrap();

        assert_eq!(board.len(), 6);
        for value in &palette {
            let count = board.cards().iter().filter(|c| &c.value == value).count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn test_deal_duplicate_palette_entry_is_invalid() {
        let mut rng = GameRng::new(42);
        let palette = symbols(&["A", "A"]);
        let err = Board::deal(&palette, &mut rng, ShuffleStrategy::FisherYates).unwrap_err();
        assert!(matches!(err, InvalidBoardError::WrongMultiplicity { count: 4, .. }));
    }

    #[test]
    fn test_flip_and_unflip() {
        let mut board = abab();
        let id = CardId::new(0);

        let card = board.flip(id).unwrap();
        assert_eq!(card.face, CardFace::Up);

        assert_eq!(
            board.flip(id),
            Err(InvalidMoveError::CardNotDown { card: id, face: CardFace::Up })
        );

        board.unflip(id).unwrap();
        assert!(board.card(id).unwrap().is_down());

        assert_eq!(
            board.unflip(id),
            Err(InvalidMoveError::CardNotUp { card: id, face: CardFace::Down })
        );
    }

    #[test]
    fn test_unknown_card() {
        let mut board = abab();
        assert_eq!(
            board.flip(CardId::new(4)),
            Err(InvalidMoveError::UnknownCard { card: CardId::new(4), board_len: 4 })
        );
    }

    #[test]
    fn test_mark_matched() {
        let mut board = abab();
        board.flip(CardId::new(1)).unwrap();
        board.flip(CardId::new(3)).unwrap();
        board.mark_matched(CardId::new(1), CardId::new(3)).unwrap();

        assert!(board.card(CardId::new(1)).unwrap().is_matched());
        assert!(board.card(CardId::new(3)).unwrap().is_matched());
        assert_eq!(board.matched_count(), 2);
        assert!(!board.is_cleared());

        // Matched cards cannot flip again
        assert!(matches!(
            board.flip(CardId::new(1)),
            Err(InvalidMoveError::CardNotDown { face: CardFace::Matched, .. })
        ));
    }

    #[test]
    fn test_mark_matched_rejects_mismatch_without_change() {
        let mut board = abab();
        board.flip(CardId::new(0)).unwrap();
        board.flip(CardId::new(1)).unwrap();

        let before = board.clone();
        assert_eq!(
            board.mark_matched(CardId::new(0), CardId::new(1)),
            Err(InvalidMoveError::NotAPair {
                first: CardId::new(0),
                second: CardId::new(1)
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_mark_matched_requires_up() {
        let mut board = abab();
        board.flip(CardId::new(0)).unwrap();

        assert!(matches!(
            board.mark_matched(CardId::new(0), CardId::new(2)),
            Err(InvalidMoveError::CardNotUp { .. })
        ));
        assert!(board.card(CardId::new(0)).unwrap().is_up());
    }

    #[test]
    fn test_mark_matched_rejects_self_pair() {
        let mut board = abab();
        board.flip(CardId::new(0)).unwrap();
        assert!(matches!(
            board.mark_matched(CardId::new(0), CardId::new(0)),
            Err(InvalidMoveError::NotAPair { .. })
        ));
    }

    #[test]
    fn test_reset_faces() {
        let mut board = abab();
        board.flip(CardId::new(0)).unwrap();
        board.flip(CardId::new(2)).unwrap();
        board.mark_matched(CardId::new(0), CardId::new(2)).unwrap();
        board.flip(CardId::new(1)).unwrap();

        board.reset_faces();
        assert_eq!(board, abab());
    }

    // =========================================================================
    // Deserialization
    // =========================================================================

    #[test]
    fn test_deserialize_round_trip_mid_game() {
        let mut board = abab();
        board.flip(CardId::new(1)).unwrap();
        board.flip(CardId::new(3)).unwrap();
        board.mark_matched(CardId::new(1), CardId::new(3)).unwrap();
        board.flip(CardId::new(0)).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_deserialize_rejects_unpaired_values() {
        let json = r#"{"cards":[
            {"id":0,"value":"A","face":"Down"},
            {"id":1,"value":"B","face":"Down"}
        ]}"#;
        let err = serde_json::from_str::<Board>(json).unwrap_err();
        assert!(err.to_string().contains("value A appears 1 times"));
    }

    #[test]
    fn test_deserialize_rejects_empty_and_misplaced() {
        assert!(serde_json::from_str::<Board>(r#"{"cards":[]}"#).is_err());

        let json = r#"{"cards":[
            {"id":1,"value":"A","face":"Down"},
            {"id":0,"value":"A","face":"Down"}
        ]}"#;
        let err = serde_json::from_str::<Board>(json).unwrap_err();
        assert!(err.to_string().contains("position 0"));
    }

    #[test]
    fn test_deserialize_rejects_half_matched_pair() {
        let json = r#"{"cards":[
            {"id":0,"value":"A","face":"Matched"},
            {"id":1,"value":"A","face":"Up"}
        ]}"#;
        let err = serde_json::from_str::<Board>(json).unwrap_err();
        assert!(err.to_string().contains("only one card of value A"));
    }

    #[test]
    fn test_cleared() {
        let mut board = abab();
        for (a, b) in [(0, 2), (1, 3)] {
            board.flip(CardId::new(a)).unwrap();
            board.flip(CardId::new(b)).unwrap();
            board.mark_matched(CardId::new(a), CardId::new(b)).unwrap();
        }
        assert!(board.is_cleared());
    }
}
