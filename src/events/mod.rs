//! Notifications from the game core to the UI layer.
//!
//! ## Key Types
//!
//! - `GameEvent`: one visible change
//! - `GameObserver`: callback trait implemented by the UI
//! - `EventLog`: observer that keeps every event, for tests and replays

pub mod observer;

pub use observer::{EventLog, GameEvent, GameObserver};
