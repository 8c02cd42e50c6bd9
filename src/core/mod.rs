//! Core value types of the game.
//!
//! This module contains the leaf collaborators of the state machine:
//! - Level progression ([`Level`])
//! - The per-level countdown ([`Chrono`], [`TimerToken`])
//! - Signals and sequence generation ([`Signal`], [`SequenceGenerator`])
//! - Run history ([`GameHistory`], [`RunRecord`])
//!
//! Everything here is synchronous and free of I/O; the state machine in
//! [`crate::game`] is the only component that mutates these values.

mod chrono;
mod error;
mod history;
mod level;
mod signal;
mod state;

pub use self::chrono::{Chrono, TimerToken};
pub use error::GameError;
pub use history::{GameHistory, RunOutcome, RunRecord};
pub use level::Level;
pub use signal::{SequenceGenerator, Signal};
pub use state::State;
