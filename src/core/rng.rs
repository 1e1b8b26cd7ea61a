//! Deterministic random number generation and deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same sequence of deals
//! - **Two shuffle strategies**: unbiased Fisher–Yates, or the exclusive-bound
//!   variant that reproduces the classic browser version of the game
//!
//! ```
//! use memory_match::core::{GameRng, ShuffleStrategy};
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = vec!['a', 'a', 'b', 'b'];
//! rng.shuffle(&mut deck, ShuffleStrategy::FisherYates);
//!
//! deck.sort();
//! assert_eq!(deck, vec!['a', 'a', 'b', 'b']);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// How the swap partner is drawn at each step of the shuffle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShuffleStrategy {
    /// Swap partner drawn from `[0, i]`. Every permutation is reachable with
    /// equal probability.
    #[default]
    FisherYates,

    /// Swap partner drawn from `[0, i)`.
    ///
    /// This is Sattolo's algorithm: it only produces cyclic permutations, so
    /// no item ever stays at its starting index.
    ExclusiveUpperBound,
}

/// Deterministic RNG used to deal boards.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T], strategy: ShuffleStrategy) {
        match strategy {
            ShuffleStrategy::FisherYates => slice.shuffle(&mut self.inner),
            ShuffleStrategy::ExclusiveUpperBound => {
                // Same walk as Fisher-Yates, but j never equals i
                for i in (1..slice.len()).rev() {
                    let j = self.gen_range_usize(0..i);
                    slice.swap(i, j);
                }
            }
        }
    }
}
