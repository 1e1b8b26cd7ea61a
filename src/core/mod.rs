//! Core building blocks: configuration, phases, errors, RNG.

pub mod config;
pub mod error;
pub mod phase;
pub mod rng;

pub use config::{GameConfig, DEFAULT_PALETTE, DEFAULT_RESOLVE_DELAY_MS, DEFAULT_SEED};
pub use error::{GameError, InvalidBoardError, InvalidMoveError, StoreError};
pub use phase::GamePhase;
pub use rng::{GameRng, ShuffleStrategy};
