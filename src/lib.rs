//! # memory-match
//!
//! Game core for a pair-matching memory card game: cards are dealt face-down,
//! turned over two at a time, matching pairs stay revealed, and mismatches
//! flip back after a short delay. The core counts turns and keeps the best
//! (lowest) turn count in a persistent store.
//!
//! ## Design Principles
//!
//! 1. **One owner per session**: a `GameSession` owns its board, counters,
//!    and collaborators. Sessions share nothing.
//!
//! 2. **Collaborators are traits**: rendering (`GameObserver`), persistence
//!    (`KeyValueStore`), and timing (`Scheduler`) are injected, so tests run
//!    against an event log, an in-memory store, and a manual clock.
//!
//! 3. **Rejected events change nothing**: an invalid selection returns an
//!    error and leaves the board and counters exactly as they were.
//!
//! ## Modules
//!
//! - `core`: configuration, phases, errors, RNG and shuffling
//! - `cards`: card identity, values, and face state
//! - `board`: the dealt row of cards
//! - `game`: the session state machine
//! - `score`: turn counting and best-score persistence
//! - `events`: UI notifications
//! - `timer`: scheduled resolution of mismatched pairs

pub mod core;
pub mod cards;
pub mod board;
pub mod game;
pub mod score;
pub mod events;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GamePhase, GameRng, ShuffleStrategy,
    GameError, InvalidBoardError, InvalidMoveError, StoreError,
};

pub use crate::cards::{Card, CardFace, CardId, Symbol};

pub use crate::board::Board;

pub use crate::game::{CardView, GameSession, SelectOutcome, SelectionBuffer, SessionSnapshot};

pub use crate::score::{
    FileStore, KeyValueStore, MemoryStore,
    ScoreState, ScoreTracker, ScoreUpdate, HIGHSCORE_KEY,
};

pub use crate::events::{EventLog, GameEvent, GameObserver};

pub use crate::timer::{ManualScheduler, ResolutionTicket, Scheduler};
