//! Score tracking and best-score persistence.
//!
//! ## Key Types
//!
//! - `ScoreTracker`: turns, pairs, and the best score
//! - `KeyValueStore`: persistence collaborator (`get`/`set` on text)
//! - `MemoryStore`, `FileStore`: bundled stores

pub mod store;
pub mod tracker;

pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use tracker::{ScoreState, ScoreTracker, ScoreUpdate, HIGHSCORE_KEY};
