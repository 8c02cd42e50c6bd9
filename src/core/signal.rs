//! Signals and the per-level sequence generator.
//!
//! A [`Signal`] is one of the four colored stimuli the player must recall.
//! [`SequenceGenerator`] grows a sequence one uniformly drawn signal at a
//! time; it is the only source of randomness in the core and can be seeded
//! for deterministic tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four colored stimuli of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    /// The red button.
    Red,
    /// The green button.
    Green,
    /// The yellow button.
    Yellow,
    /// The blue button.
    Blue,
}

impl Signal {
    /// All signals, in presentation order.
    pub const ALL: [Signal; 4] = [Signal::Red, Signal::Green, Signal::Yellow, Signal::Blue];
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Signal::Red => "red",
            Signal::Green => "green",
            Signal::Yellow => "yellow",
            Signal::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Grows signal sequences by one uniform draw at a time.
///
/// The append-only rule is the recall discipline of the game: level N's
/// sequence is level N-1's sequence plus exactly one new signal at the
/// end, prior entries untouched.
///
/// # Example
///
/// ```rust
/// use simon_core::core::SequenceGenerator;
///
/// let mut generator = SequenceGenerator::from_seed(7);
/// let first = generator.next(&[]);
/// assert_eq!(first.len(), 1);
///
/// let second = generator.next(&first);
/// assert_eq!(second.len(), 2);
/// assert_eq!(&second[..1], &first[..]);
/// ```
#[derive(Debug)]
pub struct SequenceGenerator {
    rng: ChaCha8Rng,
}

impl SequenceGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed, for reproducible sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw one signal uniformly.
    pub fn draw(&mut self) -> Signal {
        Signal::ALL[self.rng.gen_range(0..Signal::ALL.len())]
    }

    /// Return `previous` extended by one freshly drawn signal.
    ///
    /// Pure apart from advancing the random state: the input slice is not
    /// modified and is copied verbatim into the front of the result.
    pub fn next(&mut self, previous: &[Signal]) -> Vec<Signal> {
        let mut sequence = Vec::with_capacity(previous.len() + 1);
        sequence.extend_from_slice(previous);
        sequence.push(self.draw());
        sequence
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_appends_exactly_one_signal() {
        let mut generator = SequenceGenerator::from_seed(42);
        let sequence = generator.next(&[]);
        assert_eq!(sequence.len(), 1);
        let longer = generator.next(&sequence);
        assert_eq!(longer.len(), 2);
    }

    #[test]
    fn next_preserves_the_prefix() {
        let mut generator = SequenceGenerator::from_seed(42);
        let mut sequence = Vec::new();
        for _ in 0..10 {
            let grown = generator.next(&sequence);
            assert_eq!(&grown[..sequence.len()], &sequence[..]);
            sequence = grown;
        }
    }

    #[test]
    fn same_seed_yields_same_sequence() {
        let mut a = SequenceGenerator::from_seed(7);
        let mut b = SequenceGenerator::from_seed(7);
        let mut seq_a = Vec::new();
        let mut seq_b = Vec::new();
        for _ in 0..20 {
            seq_a = a.next(&seq_a);
            seq_b = b.next(&seq_b);
        }
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn draw_covers_all_signals_eventually() {
        let mut generator = SequenceGenerator::from_seed(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(generator.draw());
        }
        assert_eq!(seen.len(), Signal::ALL.len());
    }

    #[test]
    fn signal_display_names_are_lowercase_colors() {
        assert_eq!(Signal::Red.to_string(), "red");
        assert_eq!(Signal::Blue.to_string(), "blue");
    }

    #[test]
    fn signal_serializes_correctly() {
        let json = serde_json::to_string(&Signal::Yellow).unwrap();
        let back: Signal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Signal::Yellow);
    }
}
