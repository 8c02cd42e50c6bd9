//! The game state machine.
//!
//! [`GameMachine`] is the single source of truth for a session: it owns the
//! level, the chrono, the working sequence, the run history and the
//! notifier, and it is the only component allowed to mutate them. The
//! presentation layer issues commands, the machine transitions and
//! broadcasts the new state, the presentation layer reacts and issues the
//! next command.
//!
//! Commands arriving in a state where they make no sense are silent
//! no-ops: the UI is responsible for not sending them, but a benign race
//! (a click landing just after the chrono expired, say) must not corrupt
//! the session.

use crate::core::{
    Chrono, GameHistory, Level, RunOutcome, RunRecord, SequenceGenerator, Signal, State,
    TimerToken,
};
use crate::game::state::{GameState, ReplayMode};
use crate::notify::{Notifier, StateListener, SubscriptionId};
use std::sync::Arc;
use tracing::{debug, trace};

/// Orchestrator of a game session.
///
/// Initial state is [`GameState::NotStarted`]; terminal states are left
/// via [`GameMachine::end`], so the machine is cyclic rather than
/// one-shot.
///
/// # Example
///
/// ```rust
/// use simon_core::game::{GameMachine, GameState};
///
/// let mut game = GameMachine::with_seed(7);
/// game.start();
/// assert_eq!(game.state(), GameState::Started);
/// assert_eq!(game.sequence().len(), 1);
///
/// game.sequence_over();
/// assert_eq!(game.state(), GameState::PlayerTurn);
///
/// let expected = game.sequence()[0];
/// game.click(expected);
/// assert_eq!(game.state(), GameState::NextLevel);
/// ```
pub struct GameMachine {
    state: GameState,
    level: Level,
    chrono: Chrono,
    generator: SequenceGenerator,
    history: GameHistory,
    notifier: Notifier<GameState>,
    sequence: Vec<Signal>,
    cursor: usize,
}

impl GameMachine {
    /// Create a machine with an entropy-seeded sequence generator.
    pub fn new() -> Self {
        Self::with_generator(SequenceGenerator::new())
    }

    /// Create a machine with a fixed random seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(SequenceGenerator::from_seed(seed))
    }

    fn with_generator(generator: SequenceGenerator) -> Self {
        Self {
            state: GameState::NotStarted,
            level: Level::default(),
            chrono: Chrono::new(),
            generator,
            history: GameHistory::new(),
            notifier: Notifier::new(),
            sequence: Vec::new(),
            cursor: 0,
        }
    }

    // ----- commands ------------------------------------------------------

    /// Reset the session to its base configuration and notify.
    ///
    /// Level and chrono return to their base values, the working sequence
    /// is cleared. History is kept: it lives for the whole process.
    pub fn init(&mut self) {
        self.level.init();
        self.chrono.init();
        self.sequence.clear();
        self.cursor = 0;
        self.transition(GameState::NotStarted);
    }

    /// Capture the replay mode and enter the pre-game countdown state.
    ///
    /// The host runs its own countdown animation and calls
    /// [`GameMachine::timer_ready`] when it finishes. Only valid from
    /// `NotStarted`.
    pub fn request_timer(&mut self, mode: ReplayMode) {
        if self.state != GameState::NotStarted {
            self.reject("request_timer");
            return;
        }
        self.transition(GameState::StartedTimer(mode));
    }

    /// Signal that the host's pre-game countdown finished.
    ///
    /// Dispatches to [`GameMachine::start`], [`GameMachine::last`] or
    /// [`GameMachine::longest`] according to the captured mode.
    pub fn timer_ready(&mut self) {
        match self.state {
            GameState::StartedTimer(ReplayMode::Fresh) => self.start(),
            GameState::StartedTimer(ReplayMode::Last) => self.last(),
            GameState::StartedTimer(ReplayMode::Longest) => self.longest(),
            _ => self.reject("timer_ready"),
        }
    }

    /// Begin a fresh run: base level, base time, one random signal.
    pub fn start(&mut self) {
        self.level.init();
        self.chrono.init();
        self.sequence = self.generator.next(&[]);
        self.cursor = 0;
        self.transition(GameState::Started);
    }

    /// Begin a run replaying the most recent one, or a fresh run if no
    /// run has finished yet.
    pub fn last(&mut self) {
        match self.history.replay_last() {
            Some(record) => self.restore(record),
            None => self.start(),
        }
    }

    /// Begin a run replaying the best one, or a fresh run if no run has
    /// finished yet.
    pub fn longest(&mut self) {
        match self.history.replay_longest() {
            Some(record) => self.restore(record),
            None => self.start(),
        }
    }

    fn restore(&mut self, record: RunRecord) {
        self.sequence = record.sequence().to_vec();
        self.level = record.level().clone();
        self.chrono.init();
        self.chrono.sync_to(&self.level);
        self.cursor = 0;
        self.transition(GameState::Started);
    }

    /// Signal that the presentation finished replaying the sequence.
    ///
    /// Valid from `Started` (first level) and `Turn` (every later level):
    /// arms the chrono and hands the turn to the player.
    pub fn sequence_over(&mut self) {
        if !matches!(self.state, GameState::Started | GameState::Turn) {
            self.reject("sequence_over");
            return;
        }
        self.cursor = 0;
        self.chrono.start();
        self.transition(GameState::PlayerTurn);
    }

    /// Report a player click on `signal`.
    ///
    /// Outside `PlayerTurn` this is a no-op. A correct click mid-sequence
    /// advances the expectation silently (no state change, no
    /// notification); the correct final click moves to `NextLevel`; any
    /// wrong click ends the run in `GameOver` and records it in history.
    pub fn click(&mut self, signal: Signal) {
        if self.state != GameState::PlayerTurn {
            self.reject("click");
            return;
        }
        let Some(&expected) = self.sequence.get(self.cursor) else {
            // Cursor past the sequence can only mean a host bug; ignore.
            self.reject("click");
            return;
        };

        if signal != expected {
            self.chrono.cancel();
            self.record_run(RunOutcome::Mismatch);
            self.transition(GameState::GameOver);
            return;
        }

        self.cursor += 1;
        if self.cursor == self.sequence.len() {
            self.chrono.cancel();
            self.transition(GameState::NextLevel);
        } else {
            trace!(index = self.cursor, "click matched, expecting next signal");
        }
    }

    /// Deliver a chrono expiry scheduled by the host.
    ///
    /// The token must be the one the chrono is currently armed with;
    /// expiries that were cancelled, superseded by a re-arm, or that
    /// arrive outside `PlayerTurn` are dropped.
    pub fn time_over(&mut self, token: TimerToken) {
        if self.state != GameState::PlayerTurn || !self.chrono.accepts(token) {
            trace!(state = self.state.name(), "dropping stale timer expiry");
            return;
        }
        self.chrono.cancel();
        self.record_run(RunOutcome::TimeOver);
        self.transition(GameState::TimeIsOver);
    }

    /// Acknowledge a completed level and move to the next one.
    ///
    /// Upgrades level and chrono, appends one new random signal to the
    /// sequence, restarts the chrono and presents the longer sequence.
    pub fn next_level(&mut self) {
        if self.state != GameState::NextLevel {
            self.reject("next_level");
            return;
        }
        self.level.upgrade();
        self.chrono.upgrade();
        self.sequence = self.generator.next(&self.sequence);
        self.cursor = 0;
        self.chrono.start();
        self.transition(GameState::Turn);
    }

    /// Leave a terminal state and return to `NotStarted`.
    pub fn end(&mut self) {
        if !self.state.is_terminal() {
            self.reject("end");
            return;
        }
        self.init();
    }

    // ----- queries -------------------------------------------------------

    /// The current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The current run's full signal sequence.
    pub fn sequence(&self) -> &[Signal] {
        &self.sequence
    }

    /// The current level.
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// The chrono's current second budget.
    pub fn time(&self) -> u32 {
        self.chrono.time()
    }

    /// The replay mode captured by [`GameMachine::request_timer`], while
    /// the pre-game countdown is running.
    pub fn pending_mode(&self) -> Option<ReplayMode> {
        match self.state {
            GameState::StartedTimer(mode) => Some(mode),
            _ => None,
        }
    }

    /// The token of the chrono's current arming, if armed.
    ///
    /// The host captures this when entering `PlayerTurn` and passes it
    /// back via [`GameMachine::time_over`] when its delay elapses.
    pub fn timer_token(&self) -> Option<TimerToken> {
        self.chrono.current_token()
    }

    /// The run history of this process.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    // ----- notifications -------------------------------------------------

    /// Register a listener for state change broadcasts.
    pub fn subscribe(&self, listener: Arc<dyn StateListener<GameState>>) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    /// Remove a previously registered listener.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// A shared handle to the notifier, for hosts that wire subscriptions
    /// elsewhere.
    pub fn notifier(&self) -> Notifier<GameState> {
        self.notifier.clone()
    }

    // ----- internals -----------------------------------------------------

    fn transition(&mut self, to: GameState) {
        debug!(from = self.state.name(), to = to.name(), "transition");
        self.state = to;
        self.notifier.fire_change(&self.state);
    }

    fn record_run(&mut self, outcome: RunOutcome) {
        let record = RunRecord::new(self.sequence.clone(), self.level.clone(), outcome);
        self.history.record(record);
    }

    fn reject(&self, command: &str) {
        trace!(command, state = self.state.name(), "command rejected in current state");
    }
}

impl Default for GameMachine {
    fn default() -> Self {
        Self::new()
    }
}
