//! Simon Core: the state machine of a Simon-style memory game.
//!
//! The player watches a growing sequence of colored signals and must
//! reproduce it; each success lengthens the sequence by one and adds a
//! second to the countdown, any mismatch or timeout ends the run. This
//! crate is the game's core only: turn sequencing, sequence generation,
//! level and timer progression, win/loss detection and replay bookkeeping.
//! Rendering, input devices and audio live in the host and talk to the
//! core through two narrow interfaces: the command API of
//! [`game::GameMachine`] and the [`notify::Notifier`] broadcasts.
//!
//! # Core Concepts
//!
//! - **Signal**: one of four colored stimuli ([`core::Signal`])
//! - **Sequence**: the append-only signal list of the current run
//! - **Level**: sequence length and time budget grow one step per level
//! - **History**: the last and the longest run of the process, replayable
//!
//! # Example
//!
//! ```rust
//! use simon_core::core::Signal;
//! use simon_core::game::{GameMachine, GameState};
//!
//! let mut game = GameMachine::with_seed(7);
//! game.start();
//! assert_eq!(game.sequence().len(), 1);
//!
//! // The host finished presenting the sequence; the player's turn begins.
//! game.sequence_over();
//! assert_eq!(game.state(), GameState::PlayerTurn);
//!
//! // Reproduce the sequence correctly to advance.
//! let signal = game.sequence()[0];
//! game.click(signal);
//! assert_eq!(game.state(), GameState::NextLevel);
//!
//! game.next_level();
//! assert_eq!(game.level().level(), 2);
//! assert_eq!(game.sequence().len(), 2);
//! ```

pub mod core;
pub mod game;
pub mod notify;

// Re-export commonly used types
pub use crate::core::{
    Chrono, GameError, GameHistory, Level, SequenceGenerator, Signal, State, TimerToken,
};
pub use game::{GameMachine, GameState, ReplayMode};
pub use notify::{Notifier, StateListener, SubscriptionId};
