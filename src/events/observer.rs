//! UI-facing notifications.
//!
//! A session tells its observer about every visible change: a card turning
//! over, a pair locking in, the turn counter moving, the game ending. The UI
//! layer implements `GameObserver`; tests use `EventLog`.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Symbol};

/// Something the UI should show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh board with `pairs` pairs was dealt.
    GameStarted { pairs: usize },
    /// A card turned face-up, revealing `value`.
    Flipped { card: CardId, value: Symbol },
    /// A card turned back face-down.
    Unflipped { card: CardId },
    /// Two cards were confirmed as a pair.
    Matched { first: CardId, second: CardId },
    /// The turn counter changed.
    TurnCountChanged { turns: u32 },
    /// The last pair was found. `new_best` is set when `turns` beat the stored best.
    GameWon { turns: u32, new_best: bool },
}

/// Receiver for session notifications.
///
/// Every method defaults to doing nothing, so implementors only override
/// what they render.
pub trait GameObserver {
    fn on_game_started(&mut self, _pairs: usize) {}

    fn on_flip(&mut self, _card: CardId, _value: &Symbol) {}

    fn on_unflip(&mut self, _card: CardId) {}

    fn on_matched(&mut self, _first: CardId, _second: CardId) {}

    fn on_turn_count_changed(&mut self, _turns: u32) {}

    fn on_game_won(&mut self, _turns: u32, _new_best: bool) {}

    /// Dispatch an event to the matching callback.
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted { pairs } => self.on_game_started(*pairs),
            GameEvent::Flipped { card, value } => self.on_flip(*card, value),
            GameEvent::Unflipped { card } => self.on_unflip(*card),
            GameEvent::Matched { first, second } => self.on_matched(*first, *second),
            GameEvent::TurnCountChanged { turns } => self.on_turn_count_changed(*turns),
            GameEvent::GameWon { turns, new_best } => self.on_game_won(*turns, *new_best),
        }
    }
}

/// Headless sessions ignore notifications.
impl GameObserver for () {}

/// Observer that records every notification in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of `GameWon` events recorded.
    #[must_use]
    pub fn wins(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameWon { .. }))
            .count()
    }
}

impl GameObserver for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
