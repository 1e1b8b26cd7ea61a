//! Cards - identity, pair value, and face state.
//!
//! A `Card` is owned by the board. Its `id` is its position on the board and
//! never changes during a game; its `face` moves through
//! `Down -> Up -> Matched`, or `Up -> Down` after a mismatch.

use serde::{Deserialize, Serialize};

/// Card identifier: the card's position on the board, `0..N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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

    /// Board index for this card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Pair value shown on a card's face.
///
/// Two cards match when their symbols are equal. The default palette uses
/// CSS colour strings, but any text works.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl Symbol {
    /// Create a new symbol.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which side of a card is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Face-down and selectable.
    #[default]
    Down,
    /// Face-up, waiting for its pair to be resolved.
    Up,
    /// Part of a confirmed pair. Stays revealed for the rest of the game.
    Matched,
}

impl CardFace {
    /// Is the card's value visible?
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Up | Self::Matched)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Board position.
    pub id: CardId,

    /// Pair value.
    pub value: Symbol,

    /// Current face state.
    pub face: CardFace,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, value: Symbol) -> Self {
        Self {
            id,
            value,
            face: CardFace::Down,
        }
    }

    /// Is this card face-down?
    #[must_use]
    pub fn is_down(&self) -> bool {
        self.face == CardFace::Down
    }

    /// Is this card face-up and unresolved?
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.face == CardFace::Up
    }

    /// Has this card been matched?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.face == CardFace::Matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(id.index(), 7);
        assert_eq!(format!("{}", id), "Card(7)");
    }

    #[test]
    fn test_new_card_is_down() {
        let card = Card::new(CardId::new(0), Symbol::from("#264653"));
        assert!(card.is_down());
        assert!(!card.is_up());
        assert!(!card.is_matched());
        assert!(!card.face.is_revealed());
    }

    #[test]
    fn test_face_revealed() {
        assert!(!CardFace::Down.is_revealed());
        assert!(CardFace::Up.is_revealed());
        assert!(CardFace::Matched.is_revealed());
    }

    #[test]
    fn test_symbol_equality_is_by_value() {
        let a = Symbol::new(String::from("red"));
        let b = Symbol::from("red");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "red");
        assert_eq!(format!("{}", a), "red");
    }
}
