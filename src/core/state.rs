//! Core `State` trait for game states.
//!
//! The notifier only needs a handful of pure methods from a state value,
//! so it is generic over this trait rather than tied to the concrete
//! game enum.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for game state values.
///
/// All methods are pure. States are immutable tags (possibly carrying
/// state-specific payload) describing where the machine currently is.
///
/// # Required Traits
///
/// - `Clone`: states are copied into notifications
/// - `PartialEq`: states are compared in transition logic and tests
/// - `Debug`: states show up in diagnostics and trace logs
/// - `Serialize` + `Deserialize`: states cross process boundaries in hosts
///   that snapshot their UI model
///
/// # Example
///
/// ```rust
/// use simon_core::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Idle,
///     Running,
///     Done,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Running => "Running",
///             Self::Done => "Done",
///         }
///     }
///
///     fn is_terminal(&self) -> bool {
///         matches!(self, Self::Done)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this state ends the current run.
    ///
    /// Terminal states are where a play-through stops; the machine itself
    /// stays usable (a new run can be started from them).
    ///
    /// Default implementation returns `false`.
    fn is_terminal(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Running,
        Done,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
                Self::Done => "Done",
            }
        }

        fn is_terminal(&self) -> bool {
            matches!(self, Self::Done)
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Running.name(), "Running");
        assert_eq!(TestState::Done.name(), "Done");
    }

    #[test]
    fn is_terminal_identifies_run_ending_states() {
        assert!(!TestState::Idle.is_terminal());
        assert!(!TestState::Running.is_terminal());
        assert!(TestState::Done.is_terminal());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Running;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
