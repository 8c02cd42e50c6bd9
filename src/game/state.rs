//! Game states and replay modes.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// How the next run should begin once the host's pre-game countdown ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplayMode {
    /// Start a brand new run with a freshly generated sequence.
    Fresh,
    /// Replay the most recently finished run.
    Last,
    /// Replay the best run of this process.
    Longest,
}

/// The states of a game session.
///
/// Exactly one is current at any instant. Each variant carries only the
/// data valid in that state: `StartedTimer` remembers which replay mode
/// was chosen, everything else carries none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No run in progress; the machine is at its base configuration.
    NotStarted,
    /// The host's pre-game countdown is running; the captured mode says
    /// which kind of run to start once it ends.
    StartedTimer(ReplayMode),
    /// A run has begun and its first sequence is being presented.
    Started,
    /// A later level's sequence is being presented.
    Turn,
    /// The player is reproducing the sequence; the chrono is live.
    PlayerTurn,
    /// The player reproduced the whole sequence; awaiting the level-up
    /// acknowledgement from the host.
    NextLevel,
    /// The chrono expired before the sequence was reproduced.
    TimeIsOver,
    /// The player clicked a wrong signal.
    GameOver,
}

impl State for GameState {
    fn name(&self) -> &str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::StartedTimer(_) => "StartedTimer",
            Self::Started => "Started",
            Self::Turn => "Turn",
            Self::PlayerTurn => "PlayerTurn",
            Self::NextLevel => "NextLevel",
            Self::TimeIsOver => "TimeIsOver",
            Self::GameOver => "GameOver",
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::GameOver | Self::TimeIsOver)
    }
}
