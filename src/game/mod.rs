//! The game session orchestrator.
//!
//! [`GameMachine`] drives all transitions of [`GameState`]; the rest of
//! the crate only supplies the values it mutates and the notification
//! channel it broadcasts on.

mod machine;
mod state;

pub use machine::GameMachine;
pub use state::{GameState, ReplayMode};
