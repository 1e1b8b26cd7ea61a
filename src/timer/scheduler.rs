//! Delayed resolution of face-up pairs.
//!
//! The session never waits. When a pair needs to stay visible for a while it
//! hands a `ResolutionTicket` to its `Scheduler`; the host hands the ticket
//! back through `GameSession::resolve` once the delay has elapsed.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A pending pair resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionTicket {
    /// Generation of the game that scheduled this ticket.
    pub generation: u64,
    /// First card of the pair.
    pub first: CardId,
    /// Second card of the pair.
    pub second: CardId,
}

/// Timer collaborator.
pub trait Scheduler {
    /// Arrange for `ticket` to be delivered back after `delay_ms`.
    fn schedule_once(&mut self, delay_ms: u64, ticket: ResolutionTicket);
}

/// A clock that only moves when told to.
///
/// ```
/// use memory_match::cards::CardId;
/// use memory_match::timer::{ManualScheduler, ResolutionTicket, Scheduler};
///
/// let mut clock = ManualScheduler::new();
/// let ticket = ResolutionTicket { generation: 1, first: CardId::new(0), second: CardId::new(1) };
/// clock.schedule_once(1000, ticket);
///
/// assert!(clock.advance(999).is_empty());
/// assert_eq!(clock.advance(1), vec![ticket]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    pending: Vec<(u64, ResolutionTicket)>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of tickets not yet due.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and return the tickets that came due, earliest first.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<ResolutionTicket> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let now = self.now_ms;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(due_at, _)| *due_at <= now);
        self.pending = waiting;

        // Stable sort keeps scheduling order for equal deadlines
        due.sort_by_key(|(due_at, _)| *due_at);
        due.into_iter().map(|(_, ticket)| ticket).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&mut self, delay_ms: u64, ticket: ResolutionTicket) {
        self.pending.push((self.now_ms.saturating_add(delay_ms), ticket));
    }
}
