//! The game state machine.
//!
//! A `GameSession` owns one board, one score tracker, and its three
//! collaborators (store, scheduler, observer). It processes `start_game`,
//! `select_card`, and `resolve` one at a time to completion.
//!
//! ## Turn Flow
//!
//! 1. `select_card` turns a Down card Up and counts a turn.
//! 2. The second card of a pair moves the session to `Resolving`.
//! 3. Equal values are matched immediately. Unequal values stay up until the
//!    scheduled `ResolutionTicket` comes back through `resolve`, then both
//!    flip back down.
//! 4. Matching the last pair moves the session to `Won` and offers the turn
//!    count to the score tracker.

use smallvec::SmallVec;
use tracing::{debug, info};

use super::selection::SelectionBuffer;
use super::snapshot::SessionSnapshot;
use crate::board::Board;
use crate::cards::{CardId, Symbol};
use crate::core::config::GameConfig;
use crate::core::error::{GameError, InvalidMoveError};
use crate::core::phase::GamePhase;
use crate::core::rng::GameRng;
use crate::events::{EventLog, GameEvent, GameObserver};
use crate::score::{KeyValueStore, MemoryStore, ScoreTracker, ScoreUpdate};
use crate::timer::{ManualScheduler, ResolutionTicket, Scheduler};

/// What a successful `select_card` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First card of a pair is up.
    Revealed,
    /// The pair matched.
    Matched,
    /// The pair did not match; it flips back when the ticket resolves.
    Mismatched(ResolutionTicket),
    /// The pair matched and it was the last one.
    Won(ScoreUpdate),
}

/// One player's playthrough, from first deal to any number of restarts.
///
/// ## Usage
///
/// ```
/// use memory_match::{CardId, GameConfig, GamePhase, GameSession};
///
/// let config = GameConfig::default().with_palette(["A", "B"]);
/// let mut session = GameSession::in_memory(config);
/// session.start_game().unwrap();
///
/// session.select_card(CardId::new(0)).unwrap();
/// assert_eq!(session.turns(), 1);
/// assert_eq!(session.phase(), GamePhase::Playing);
/// ```
#[derive(Debug)]
pub struct GameSession<K = MemoryStore, S = ManualScheduler, O = EventLog> {
    config: GameConfig,
    rng: GameRng,
    board: Option<Board>,
    phase: GamePhase,
    selection: SelectionBuffer,
    score: ScoreTracker<K>,
    scheduler: S,
    observer: O,
    generation: u64,
}

impl GameSession {
    /// Session with an in-memory store, a manual clock, and an event log.
    #[must_use]
    pub fn in_memory(config: GameConfig) -> Self {
        Self::new(config, MemoryStore::new(), ManualScheduler::new(), EventLog::new())
    }
}

impl<K, S, O> GameSession<K, S, O>
where
    K: KeyValueStore,
    S: Scheduler,
    O: GameObserver,
{
    /// Create an idle session. No board is dealt until `start_game`.
    pub fn new(config: GameConfig, store: K, scheduler: S, observer: O) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            board: None,
            phase: GamePhase::Idle,
            selection: SelectionBuffer::new(),
            score: ScoreTracker::new(store),
            scheduler,
            observer,
            generation: 0,
        }
    }

    /// Deal a fresh board and reset the per-game counters.
    ///
    /// Allowed from any phase. A resolution still pending from the previous
    /// game becomes stale and is ignored when it fires.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        let board = Board::deal(&self.config.palette, &mut self.rng, self.config.shuffle)?;
        debug!(
            seed = self.rng.seed(),
            pairs = self.config.pair_count(),
            shuffle = ?self.config.shuffle,
            "dealt board"
        );
        self.start_with_board(board);
        Ok(())
    }

    /// Start a game on a prepared board, e.g. to replay a recorded layout.
    ///
    /// Same reset semantics as `start_game`; the RNG is not consulted. The
    /// layout is kept but every card starts face-down.
    pub fn start_with_board(&mut self, mut board: Board) {
        board.reset_faces();
        let pairs = board.pair_count();
        let interrupted = self.phase == GamePhase::Resolving;
        let replay = self.phase.is_final();

        self.generation += 1;
        self.board = Some(board);
        self.selection.clear();
        self.score.reset_game();
        self.phase = GamePhase::Playing;

        info!(generation = self.generation, pairs, interrupted, replay, "game started");
        self.emit(GameEvent::GameStarted { pairs });
        self.emit(GameEvent::TurnCountChanged { turns: 0 });
    }

    /// Turn a card face-up.
    ///
    /// Rejected, with no state change, unless the session is `Playing` and
    /// the card is Down.
    pub fn select_card(&mut self, card: CardId) -> Result<SelectOutcome, InvalidMoveError> {
        if !self.phase.accepts_selection() {
            return Err(match self.phase {
                GamePhase::Resolving => InvalidMoveError::Resolving,
                phase => InvalidMoveError::NotPlaying(phase),
            });
        }
        if self.selection.is_full() {
            return Err(InvalidMoveError::Resolving);
        }

        let board = self
            .board
            .as_mut()
            .ok_or(InvalidMoveError::NotPlaying(self.phase))?;
        let value = board.flip(card)?.value.clone();

        self.selection.push(card)?;
        let turns = self.score.record_turn();
        debug!(%card, %value, turns, "card flipped");
        self.emit(GameEvent::TurnCountChanged { turns });
        self.emit(GameEvent::Flipped { card, value });

        match self.selection.pair() {
            Some((first, second)) => {
                self.phase = GamePhase::Resolving;
                self.resolve_pair(first, second)
            }
            None => Ok(SelectOutcome::Revealed),
        }
    }

    /// Deliver a ticket from the scheduler.
    ///
    /// Flips any still-Up cards of the pair back down and reopens selection.
    /// Returns `false` for a stale ticket (from an earlier game, or for a
    /// pair that is no longer pending), which changes nothing.
    pub fn resolve(&mut self, ticket: ResolutionTicket) -> bool {
        let pending = self.phase == GamePhase::Resolving
            && ticket.generation == self.generation
            && self.selection.pair() == Some((ticket.first, ticket.second));
        let Some(board) = self.board.as_mut().filter(|_| pending) else {
            debug!(?ticket, generation = self.generation, "ignoring stale resolution ticket");
            return false;
        };

        // Matched cards (lock-after-match) stay put; only Up cards flip back.
        let mut unflipped = SmallVec::<[CardId; 2]>::new();
        for card in [ticket.first, ticket.second] {
            if board.unflip(card).is_ok() {
                unflipped.push(card);
            }
        }

        self.selection.clear();
        self.phase = GamePhase::Playing;
        for card in unflipped {
            self.emit(GameEvent::Unflipped { card });
        }
        true
    }

    fn resolve_pair(&mut self, first: CardId, second: CardId) -> Result<SelectOutcome, InvalidMoveError> {
        let board = self
            .board
            .as_mut()
            .ok_or(InvalidMoveError::NotPlaying(self.phase))?;
        let matched = match board.mark_matched(first, second) {
            Ok(()) => true,
            Err(InvalidMoveError::NotAPair { .. }) => false,
            Err(err) => return Err(err),
        };
        let pair_count = board.pair_count();

        if !matched {
            let ticket = self.schedule_resolution(first, second);
            debug!(%first, %second, "mismatch");
            return Ok(SelectOutcome::Mismatched(ticket));
        }

        let pairs = self.score.record_match();
        debug!(%first, %second, pairs, "pair matched");
        self.emit(GameEvent::Matched { first, second });

        if pairs as usize == pair_count {
            return Ok(SelectOutcome::Won(self.finish_game()));
        }

        if self.config.lock_after_match {
            self.schedule_resolution(first, second);
        } else {
            self.selection.clear();
            self.phase = GamePhase::Playing;
        }
        Ok(SelectOutcome::Matched)
    }

    fn schedule_resolution(&mut self, first: CardId, second: CardId) -> ResolutionTicket {
        let ticket = ResolutionTicket {
            generation: self.generation,
            first,
            second,
        };
        self.scheduler.schedule_once(self.config.resolve_delay_ms, ticket);
        ticket
    }

    fn finish_game(&mut self) -> ScoreUpdate {
        self.selection.clear();
        self.phase = GamePhase::Won;

        let turns = self.score.current_turns();
        let update = self.score.record_game_result(turns);
        info!(turns, new_best = update.updated, best = update.best_turns, "game won");
        self.emit(GameEvent::GameWon {
            turns,
            new_best: update.updated,
        });
        update
    }

    fn emit(&mut self, event: GameEvent) {
        self.observer.notify(&event);
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The current board. `None` until the first `start_game`.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Value of a card, only if it is currently revealed.
    #[must_use]
    pub fn revealed_value(&self, card: CardId) -> Option<&Symbol> {
        self.board
            .as_ref()?
            .card(card)
            .filter(|c| c.face.is_revealed())
            .map(|c| &c.value)
    }

    #[must_use]
    pub fn turns(&self) -> u32 {
        self.score.current_turns()
    }

    #[must_use]
    pub fn pairs_matched(&self) -> u32 {
        self.score.pairs_matched()
    }

    #[must_use]
    pub fn best_turns(&self) -> Option<u32> {
        self.score.best_turns()
    }

    /// Face-up cards awaiting resolution.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        self.selection.as_slice()
    }

    /// Number of games started in this session.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn score(&self) -> &ScoreTracker<K> {
        &self.score
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Serializable view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(
            self.generation,
            self.phase,
            self.board.as_ref(),
            self.selection.as_slice(),
            self.score.state(),
        )
    }

    /// End the session and hand back its store.
    pub fn into_store(self) -> K {
        self.score.into_store()
    }
}

impl<K, O> GameSession<K, ManualScheduler, O>
where
    K: KeyValueStore,
    O: GameObserver,
{
    /// Move the manual clock forward and resolve every ticket that came due.
    ///
    /// Returns how many tickets actually resolved a pair.
    pub fn advance_clock(&mut self, elapsed_ms: u64) -> usize {
        let due = self.scheduler.advance(elapsed_ms);
        let mut resolved = 0;
        for ticket in due {
            if self.resolve(ticket) {
                resolved += 1;
            }
        }
        resolved
    }
}
