//! Level progression for a run.
//!
//! A [`Level`] maps the player's current level number to the count of
//! signals presented at that level. Level 1 presents one signal; each
//! upgrade adds one more.

use super::error::GameError;
use serde::{Deserialize, Serialize};

const BASE_LEVEL: u32 = 1;
const BASE_COUNT: u32 = 1;

/// The current level of a run and the signal count that goes with it.
///
/// Invariant: `count = BASE_COUNT + (level - 1)`, i.e. level N presents
/// exactly N signals. The invariant is maintained by construction: the
/// only mutators are [`Level::upgrade`], [`Level::set_level`] and
/// [`Level::init`], and levels below 1 are rejected outright.
///
/// A `Level` value is therefore a witness that its level number is valid,
/// which lets downstream consumers (the chrono, the history) do level
/// arithmetic infallibly.
///
/// # Example
///
/// ```rust
/// use simon_core::core::Level;
///
/// let mut level = Level::default();
/// assert_eq!(level.level(), 1);
/// assert_eq!(level.count(), 1);
///
/// level.upgrade();
/// assert_eq!(level.level(), 2);
/// assert_eq!(level.count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    level: u32,
    count: u32,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            level: BASE_LEVEL,
            count: BASE_COUNT,
        }
    }
}

impl Level {
    /// Create a level at the given level number.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLevel`] if `level` is below 1. A level
    /// below 1 can only come from a buggy collaborator, so it is never
    /// clamped.
    pub fn new(level: u32) -> Result<Self, GameError> {
        let mut this = Self::default();
        this.set_level(level)?;
        Ok(this)
    }

    /// The current level number, starting at 1.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The number of signals presented at the current level.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Advance one level: level and count both increase by one.
    pub fn upgrade(&mut self) {
        self.level += 1;
        self.count += 1;
    }

    /// Reset to level 1 with a single signal.
    pub fn init(&mut self) {
        self.level = BASE_LEVEL;
        self.count = BASE_COUNT;
    }

    /// Set the level number, recomputing the signal count.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLevel`] if `level` is below 1.
    pub fn set_level(&mut self, level: u32) -> Result<(), GameError> {
        if level < BASE_LEVEL {
            return Err(GameError::InvalidLevel(level));
        }
        self.level = level;
        self.count = BASE_COUNT + (level - 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_one_with_one_signal() {
        let level = Level::default();
        assert_eq!(level.level(), 1);
        assert_eq!(level.count(), 1);
    }

    #[test]
    fn upgrade_increments_both_fields() {
        let mut level = Level::default();
        level.upgrade();
        level.upgrade();
        assert_eq!(level.level(), 3);
        assert_eq!(level.count(), 3);
    }

    #[test]
    fn set_level_recomputes_count() {
        let mut level = Level::default();
        level.set_level(7).unwrap();
        assert_eq!(level.level(), 7);
        assert_eq!(level.count(), 7);
    }

    #[test]
    fn set_level_rejects_zero() {
        let mut level = Level::default();
        assert_eq!(level.set_level(0), Err(GameError::InvalidLevel(0)));
        // Failed set leaves the value untouched.
        assert_eq!(level.level(), 1);
        assert_eq!(level.count(), 1);
    }

    #[test]
    fn new_rejects_zero() {
        assert_eq!(Level::new(0), Err(GameError::InvalidLevel(0)));
    }

    #[test]
    fn init_resets_after_upgrades() {
        let mut level = Level::new(5).unwrap();
        level.upgrade();
        level.init();
        assert_eq!(level, Level::default());
    }

    #[test]
    fn level_serializes_correctly() {
        let level = Level::new(4).unwrap();
        let json = serde_json::to_string(&level).unwrap();
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(level, back);
    }
}
