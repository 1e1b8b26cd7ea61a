//! Board model.
//!
//! A `Board` is the ordered row of cards for one game. It is created by
//! `Board::new` (explicit values) or `Board::deal` (shuffled palette) and
//! replaced wholesale when a new game starts.

pub mod layout;

pub use layout::Board;
