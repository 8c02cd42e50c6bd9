//! Run history: the most recent run and the best run of the process.
//!
//! Two slots only, in memory, gone at process exit. `last` is overwritten
//! by every finished run; `longest` only by strict improvement on the
//! level reached.

use super::level::Level;
use super::signal::Signal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The player clicked a signal that did not match the sequence.
    Mismatch,
    /// The countdown expired before the sequence was reproduced.
    TimeOver,
}

/// Snapshot of one finished run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    sequence: Vec<Signal>,
    level: Level,
    outcome: RunOutcome,
    ended_at: DateTime<Utc>,
}

impl RunRecord {
    /// Snapshot a run that just ended.
    pub fn new(sequence: Vec<Signal>, level: Level, outcome: RunOutcome) -> Self {
        Self {
            sequence,
            level,
            outcome,
            ended_at: Utc::now(),
        }
    }

    /// The full signal sequence the run had reached.
    pub fn sequence(&self) -> &[Signal] {
        &self.sequence
    }

    /// The level the run was at when it ended. A run that ends before any
    /// signal is clicked still reached level 1.
    pub fn level_reached(&self) -> u32 {
        self.level.level()
    }

    /// The level value object, for restoring a replay.
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// How the run ended.
    pub fn outcome(&self) -> RunOutcome {
        self.outcome
    }

    /// When the run ended.
    pub fn ended_at(&self) -> DateTime<Utc> {
        self.ended_at
    }
}

/// Two-slot store for the most recent and the best run.
///
/// # Example
///
/// ```rust
/// use simon_core::core::{GameHistory, Level, RunOutcome, RunRecord, Signal};
///
/// let mut history = GameHistory::new();
/// assert!(history.replay_last().is_none());
///
/// let run = RunRecord::new(vec![Signal::Red], Level::default(), RunOutcome::Mismatch);
/// history.record(run);
/// assert_eq!(history.replay_last().unwrap().level_reached(), 1);
/// ```
#[derive(Debug, Default)]
pub struct GameHistory {
    last: Option<RunRecord>,
    longest: Option<RunRecord>,
}

impl GameHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished run.
    ///
    /// Always replaces `last`. Replaces `longest` only if the run's level
    /// strictly exceeds the stored one; ties keep the earlier run.
    pub fn record(&mut self, run: RunRecord) {
        let improves = self
            .longest
            .as_ref()
            .map_or(true, |best| run.level_reached() > best.level_reached());
        if improves {
            self.longest = Some(run.clone());
        }
        self.last = Some(run);
    }

    /// A copy of the most recent run, if any run has finished yet.
    ///
    /// The copy is the caller's to mutate; history keeps its own.
    pub fn replay_last(&self) -> Option<RunRecord> {
        self.last.clone()
    }

    /// A copy of the best run, if any run has finished yet.
    pub fn replay_longest(&self) -> Option<RunRecord> {
        self.longest.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_at(level: u32, outcome: RunOutcome) -> RunRecord {
        let level = Level::new(level).unwrap();
        let sequence = vec![Signal::Red; level.count() as usize];
        RunRecord::new(sequence, level, outcome)
    }

    #[test]
    fn empty_history_has_no_replays() {
        let history = GameHistory::new();
        assert!(history.replay_last().is_none());
        assert!(history.replay_longest().is_none());
    }

    #[test]
    fn first_run_fills_both_slots() {
        let mut history = GameHistory::new();
        history.record(run_at(2, RunOutcome::Mismatch));
        assert_eq!(history.replay_last().unwrap().level_reached(), 2);
        assert_eq!(history.replay_longest().unwrap().level_reached(), 2);
    }

    #[test]
    fn last_is_always_overwritten() {
        let mut history = GameHistory::new();
        history.record(run_at(5, RunOutcome::Mismatch));
        history.record(run_at(2, RunOutcome::TimeOver));
        assert_eq!(history.replay_last().unwrap().level_reached(), 2);
        assert_eq!(history.replay_last().unwrap().outcome(), RunOutcome::TimeOver);
    }

    #[test]
    fn longest_requires_strict_improvement() {
        let mut history = GameHistory::new();
        history.record(run_at(5, RunOutcome::Mismatch));
        history.record(run_at(3, RunOutcome::Mismatch));
        assert_eq!(history.replay_longest().unwrap().level_reached(), 5);

        history.record(run_at(5, RunOutcome::TimeOver));
        // A tie keeps the earlier run.
        assert_eq!(
            history.replay_longest().unwrap().outcome(),
            RunOutcome::Mismatch
        );

        history.record(run_at(6, RunOutcome::TimeOver));
        assert_eq!(history.replay_longest().unwrap().level_reached(), 6);
    }

    #[test]
    fn replay_is_a_defensive_copy() {
        let mut history = GameHistory::new();
        history.record(run_at(3, RunOutcome::Mismatch));

        let copy = history.replay_last().unwrap();
        drop(copy);

        // Original slot untouched.
        assert_eq!(history.replay_last().unwrap().sequence().len(), 3);
    }

    #[test]
    fn run_record_serializes_correctly() {
        let run = run_at(4, RunOutcome::TimeOver);
        let json = serde_json::to_string(&run).unwrap();
        let back: RunRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(run, back);
    }
}
