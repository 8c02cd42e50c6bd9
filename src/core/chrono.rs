//! Per-level countdown timer.
//!
//! The core never blocks and never spawns threads: the host run-loop owns
//! real time. [`Chrono`] tracks the second budget for the current level and
//! hands out an armed [`TimerToken`] per `start()`. The host schedules its
//! own delay and delivers expiry back through the machine with the token it
//! captured; a token that has since been cancelled or replaced is rejected,
//! so stale fires can never drive a transition.

use super::error::GameError;
use super::level::Level;

const BASE_TIME: u32 = 5;

/// Token issued by [`Chrono::start`], one per arming.
///
/// The host passes the token back when its countdown elapses. Tokens are
/// plain generation counters; comparing them is how the core tells a live
/// expiry from a stale one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerToken(u64);

/// Countdown timer for the current level.
///
/// Holds `time = BASE_TIME + (level - 1)` seconds, where `BASE_TIME` is 5.
/// `upgrade()` adds one second per level-up; `init()` resets to the base.
///
/// Arming is logical only: `start()` issues a fresh token and marks the
/// chrono armed, `cancel()` disarms. Re-arming while armed replaces the
/// outstanding token, which invalidates any expiry still in flight for the
/// previous arming.
#[derive(Debug)]
pub struct Chrono {
    time: u32,
    generation: u64,
    armed: bool,
}

impl Default for Chrono {
    fn default() -> Self {
        Self {
            time: BASE_TIME,
            generation: 0,
            armed: false,
        }
    }
}

impl Chrono {
    /// Create a chrono with the base time budget, unarmed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining second budget for the current level.
    pub fn time(&self) -> u32 {
        self.time
    }

    /// Arm the countdown and issue the token for this arming.
    ///
    /// Calling `start` while already armed re-arms: the previous token is
    /// invalidated and a fresh one returned.
    pub fn start(&mut self) -> TimerToken {
        self.generation += 1;
        self.armed = true;
        TimerToken(self.generation)
    }

    /// Disarm the countdown. Safe to call when not armed (no-op).
    ///
    /// After `cancel`, no previously issued token is accepted until the
    /// next `start`.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Whether the countdown is currently armed.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// The token of the current arming, if armed.
    pub fn current_token(&self) -> Option<TimerToken> {
        self.armed.then_some(TimerToken(self.generation))
    }

    /// Check whether an expiry carrying `token` is still live.
    ///
    /// True only while armed with exactly that token.
    pub fn accepts(&self, token: TimerToken) -> bool {
        self.armed && token.0 == self.generation
    }

    /// Add one second to the budget, keeping the timer one second ahead
    /// per level gained.
    pub fn upgrade(&mut self) {
        self.time += 1;
    }

    /// Reset the budget to the base time and disarm.
    pub fn init(&mut self) {
        self.time = BASE_TIME;
        self.armed = false;
    }

    /// Set the budget for the given level: `BASE_TIME + (level - 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLevel`] if `level` is below 1.
    pub fn set_level(&mut self, level: u32) -> Result<(), GameError> {
        if level < 1 {
            return Err(GameError::InvalidLevel(level));
        }
        self.time = BASE_TIME + (level - 1);
        Ok(())
    }

    /// Set the budget from an already-validated [`Level`].
    ///
    /// Infallible counterpart of [`Chrono::set_level`]: a `Level` cannot
    /// hold a number below 1.
    pub fn sync_to(&mut self, level: &Level) {
        self.time = BASE_TIME + (level.level() - 1);
    }
}
