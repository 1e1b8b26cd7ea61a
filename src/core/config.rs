//! Game configuration.
//!
//! A `GameConfig` decides how many pairs are dealt and what they look like,
//! how long a mismatched pair stays visible, and how the deck is shuffled.
//! Build one with `GameConfig::default()` and the `with_*` methods.

use serde::{Deserialize, Serialize};

use super::rng::ShuffleStrategy;
use crate::cards::Symbol;

/// Colours dealt by default. Each becomes one pair, so the default board has
/// 5 pairs and 10 cards.
pub const DEFAULT_PALETTE: [&str; 5] = ["#264653", "#2a9d8f", "#e9c46a", "#f4a261", "#e76f51"];

/// How long a mismatched pair stays face-up, in milliseconds.
pub const DEFAULT_RESOLVE_DELAY_MS: u64 = 1000;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Distinct pair values. Each one is dealt onto exactly two cards.
    pub palette: Vec<Symbol>,

    /// Delay before a mismatched pair flips back down.
    pub resolve_delay_ms: u64,

    /// Seed for the deal RNG. A session replays identically from the same seed.
    pub seed: u64,

    /// Shuffle used when dealing.
    pub shuffle: ShuffleStrategy,

    /// Hold the board locked for `resolve_delay_ms` after a match as well as
    /// after a mismatch.
    pub lock_after_match: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().copied().map(Symbol::from).collect(),
            resolve_delay_ms: DEFAULT_RESOLVE_DELAY_MS,
            seed: DEFAULT_SEED,
            shuffle: ShuffleStrategy::default(),
            lock_after_match: false,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the palette.
    #[must_use]
    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    /// Set the mismatch display delay.
    #[must_use]
    pub fn with_resolve_delay_ms(mut self, delay_ms: u64) -> Self {
        self.resolve_delay_ms = delay_ms;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the shuffle strategy.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShuffleStrategy) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Lock the board after matches too.
    #[must_use]
    pub fn with_lock_after_match(mut self, lock: bool) -> Self {
        self.lock_after_match = lock;
        self
    }

    /// Number of pairs on a board (M).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.palette.len()
    }
}
