//! Error types for the game core.

use thiserror::Error;

/// Errors raised by the game core.
///
/// Gameplay outcomes (wrong click, timer expiry) are *not* errors; they are
/// ordinary state transitions. The only failures surfaced here are
/// programming errors in a collaborator, and they fail fast rather than
/// being clamped or recovered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// A level below 1 was passed to a level-aware setter.
    #[error("invalid level {0}: levels start at 1")]
    InvalidLevel(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_carries_offending_value() {
        let err = GameError::InvalidLevel(0);
        assert_eq!(err.to_string(), "invalid level 0: levels start at 1");
    }
}
