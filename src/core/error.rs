//! Error types.
//!
//! Every error here rejects a single event. None of them leave the board or
//! the counters in a partially updated state.

use thiserror::Error;

use super::phase::GamePhase;
use crate::cards::{CardFace, CardId, Symbol};

/// The values handed to a new board do not form pairs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidBoardError {
    #[error("board needs at least one pair of values")]
    Empty,

    #[error("value {value} appears {count} times, expected exactly 2")]
    WrongMultiplicity { value: Symbol, count: usize },

    #[error("card at position {position} has id {id}")]
    MisplacedCard { position: usize, id: CardId },

    #[error("only one card of value {value} is matched")]
    HalfMatched { value: Symbol },
}

/// A card event that is not allowed in the current state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidMoveError {
    #[error("{card} is not on the board (board has {board_len} cards)")]
    UnknownCard { card: CardId, board_len: usize },

    #[error("{card} cannot be flipped: it is {face:?}")]
    CardNotDown { card: CardId, face: CardFace },

    #[error("{card} is not face-up: it is {face:?}")]
    CardNotUp { card: CardId, face: CardFace },

    #[error("{first} and {second} are not a matching pair")]
    NotAPair { first: CardId, second: CardId },

    #[error("a pair is being resolved; selection is locked")]
    Resolving,

    #[error("no game in progress (phase is {0:?})")]
    NotPlaying(GamePhase),
}

/// Failures of a persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store encoding error: {0}")]
    Encode(#[from] bincode::Error),
}

/// Any error raised by a game session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidBoard(#[from] InvalidBoardError),

    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),
}
