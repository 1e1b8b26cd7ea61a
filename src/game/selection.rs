//! The face-up, unresolved cards of the current turn pair.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::error::InvalidMoveError;

/// Holds at most two card ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionBuffer {
    cards: SmallVec<[CardId; 2]>,
}

impl SelectionBuffer {
    pub const CAPACITY: usize = 2;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card. Fails once two cards are held.
    pub fn push(&mut self, card: CardId) -> Result<(), InvalidMoveError> {
        if self.is_full() {
            return Err(InvalidMoveError::Resolving);
        }
        self.cards.push(card);
        Ok(())
    }

    /// The two held cards, in selection order, once both are present.
    #[must_use]
    pub fn pair(&self) -> Option<(CardId, CardId)> {
        match self.cards.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= Self::CAPACITY
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CardId] {
        &self.cards
    }
}
