//! Turn counting and the persisted best score.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::store::KeyValueStore;

/// Store key holding the best score as decimal text.
pub const HIGHSCORE_KEY: &str = "highscore";

/// Live counters for the current game plus the all-time best.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    /// Cards turned over this game.
    pub turns: u32,
    /// Pairs found this game.
    pub pairs_matched: u32,
    /// Lowest `turns` of any completed game, if one has been completed.
    pub best_turns: Option<u32>,
}

/// Outcome of `ScoreTracker::record_game_result`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreUpdate {
    /// Did this result become the new best?
    pub updated: bool,
    /// Best score after recording.
    pub best_turns: u32,
}

/// Tracks turns and pairs, and keeps the best score in a `KeyValueStore`.
#[derive(Clone, Debug)]
pub struct ScoreTracker<K> {
    store: K,
    state: ScoreState,
}

impl<K: KeyValueStore> ScoreTracker<K> {
    /// Build a tracker, loading any best score already in `store`.
    pub fn new(store: K) -> Self {
        let best_turns = load_best(&store);
        Self {
            store,
            state: ScoreState {
                best_turns,
                ..ScoreState::default()
            },
        }
    }

    /// Zero the per-game counters. The best score is kept.
    pub fn reset_game(&mut self) {
        self.state.turns = 0;
        self.state.pairs_matched = 0;
    }

    /// Count one card turned over. Returns the new turn count.
    pub fn record_turn(&mut self) -> u32 {
        self.state.turns += 1;
        self.state.turns
    }

    /// Count one pair found. Returns the new pair count.
    pub fn record_match(&mut self) -> u32 {
        self.state.pairs_matched += 1;
        self.state.pairs_matched
    }

    /// Offer a finished game's turn count as a new best.
    ///
    /// Only a strictly lower count (or the first completed game) replaces the
    /// best. A failing store write is logged and the in-memory best still
    /// moves.
    pub fn record_game_result(&mut self, turns: u32) -> ScoreUpdate {
        match self.state.best_turns {
            Some(best) if turns >= best => ScoreUpdate {
                updated: false,
                best_turns: best,
            },
            previous => {
                self.state.best_turns = Some(turns);
                info!(turns, ?previous, "new best score");
                if let Err(err) = self.store.set(HIGHSCORE_KEY, &turns.to_string()) {
                    warn!(%err, "failed to persist best score");
                }
                ScoreUpdate {
                    updated: true,
                    best_turns: turns,
                }
            }
        }
    }

    /// Turns taken so far this game.
    #[must_use]
    pub fn current_turns(&self) -> u32 {
        self.state.turns
    }

    /// Pairs found so far this game.
    #[must_use]
    pub fn pairs_matched(&self) -> u32 {
        self.state.pairs_matched
    }

    /// Best completed game, if any.
    #[must_use]
    pub fn best_turns(&self) -> Option<u32> {
        self.state.best_turns
    }

    /// Snapshot of all counters.
    #[must_use]
    pub fn state(&self) -> ScoreState {
        self.state
    }

    #[must_use]
    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut K {
        &mut self.store
    }

    /// Give back the store, e.g. to reopen it in a new tracker.
    pub fn into_store(self) -> K {
        self.store
    }
}

fn load_best<K: KeyValueStore>(store: &K) -> Option<u32> {
    let raw = store.get(HIGHSCORE_KEY)?;
    match raw.trim().parse::<u32>() {
        Ok(best) => Some(best),
        Err(err) => {
            warn!(value = %raw, %err, "ignoring unreadable stored best score");
            None
        }
    }
}
