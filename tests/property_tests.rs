//! Property-based tests for the game core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use simon_core::core::{Chrono, GameHistory, Level, RunOutcome, RunRecord, SequenceGenerator};
use simon_core::game::{GameMachine, GameState};
use simon_core::Signal;

fn finished_run(level: u32) -> RunRecord {
    let level = Level::new(level).expect("test levels start at 1");
    let sequence = vec![Signal::Green; level.count() as usize];
    RunRecord::new(sequence, level, RunOutcome::Mismatch)
}

/// Walk the machine through `levels` fully correct levels.
fn complete_levels(game: &mut GameMachine, levels: u32) {
    for _ in 0..levels {
        game.sequence_over();
        for signal in game.sequence().to_vec() {
            game.click(signal);
        }
        assert_eq!(game.state(), GameState::NextLevel);
        game.next_level();
    }
}

proptest! {
    #[test]
    fn signal_count_equals_level(n in 1u32..500) {
        let level = Level::new(n).unwrap();
        prop_assert_eq!(level.level(), n);
        prop_assert_eq!(level.count(), n);
    }

    #[test]
    fn chrono_budget_is_base_plus_level_offset(n in 1u32..500) {
        let mut chrono = Chrono::new();
        chrono.set_level(n).unwrap();
        prop_assert_eq!(chrono.time(), 5 + (n - 1));
    }

    #[test]
    fn upgrades_track_the_closed_formulas(steps in 0u32..100) {
        let mut level = Level::default();
        let mut chrono = Chrono::new();
        for _ in 0..steps {
            level.upgrade();
            chrono.upgrade();
        }
        prop_assert_eq!(level.level(), 1 + steps);
        prop_assert_eq!(level.count(), 1 + steps);
        prop_assert_eq!(chrono.time(), 5 + steps);
    }

    #[test]
    fn sequences_grow_append_only(seed in any::<u64>(), steps in 1usize..30) {
        let mut generator = SequenceGenerator::from_seed(seed);
        let mut sequence = Vec::new();
        for expected_len in 1..=steps {
            let grown = generator.next(&sequence);
            prop_assert_eq!(grown.len(), expected_len);
            prop_assert_eq!(&grown[..sequence.len()], &sequence[..]);
            sequence = grown;
        }
    }

    #[test]
    fn seeded_generators_are_deterministic(seed in any::<u64>()) {
        let mut a = SequenceGenerator::from_seed(seed);
        let mut b = SequenceGenerator::from_seed(seed);
        let mut seq_a = Vec::new();
        let mut seq_b = Vec::new();
        for _ in 0..15 {
            seq_a = a.next(&seq_a);
            seq_b = b.next(&seq_b);
        }
        prop_assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn correct_play_always_advances(seed in any::<u64>(), levels in 1u32..12) {
        let mut game = GameMachine::with_seed(seed);
        game.start();
        complete_levels(&mut game, levels);

        prop_assert_eq!(game.state(), GameState::Turn);
        prop_assert_eq!(game.level().level(), levels + 1);
        prop_assert_eq!(game.sequence().len() as u32, levels + 1);
        prop_assert_eq!(game.time(), 5 + levels);
    }

    #[test]
    fn one_wrong_click_anywhere_ends_the_run(
        seed in any::<u64>(),
        levels in 0u32..8,
        wrong_at_proportion in 0.0f64..1.0,
    ) {
        let mut game = GameMachine::with_seed(seed);
        game.start();
        complete_levels(&mut game, levels);
        game.sequence_over();

        let sequence = game.sequence().to_vec();
        let wrong_at = ((sequence.len() - 1) as f64 * wrong_at_proportion) as usize;

        for (index, &signal) in sequence.iter().enumerate() {
            if index == wrong_at {
                let wrong = Signal::ALL
                    .into_iter()
                    .find(|&s| s != signal)
                    .expect("four signals exist");
                game.click(wrong);
                break;
            }
            game.click(signal);
        }

        prop_assert_eq!(game.state(), GameState::GameOver);
        // Later clicks, right or wrong, change nothing.
        game.click(sequence[0]);
        prop_assert_eq!(game.state(), GameState::GameOver);
        prop_assert_eq!(
            game.history().replay_last().expect("run recorded").level_reached(),
            levels + 1
        );
    }

    #[test]
    fn longest_updates_only_on_strict_improvement(
        runs in prop::collection::vec(1u32..40, 1..20)
    ) {
        let mut history = GameHistory::new();
        let mut best_so_far = 0u32;

        for level in runs {
            history.record(finished_run(level));
            if level > best_so_far {
                best_so_far = level;
            }
            prop_assert_eq!(
                history.replay_last().expect("just recorded").level_reached(),
                level
            );
            prop_assert_eq!(
                history.replay_longest().expect("non-empty").level_reached(),
                best_so_far
            );
        }
    }
}
