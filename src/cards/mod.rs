//! Card types.
//!
//! - `CardId`: board position of a card
//! - `Symbol`: the pair value printed on a card's face
//! - `CardFace`: Down, Up, or Matched
//! - `Card`: the three together

pub mod card;

pub use card::{Card, CardFace, CardId, Symbol};
