//! Replay History
//!
//! Shows the two-slot run history: the most recent run always replaces
//! `last`, while `longest` only moves on strict improvement, and either
//! can be replayed exactly, untouched by the live random source.
//!
//! Run with: cargo run --example replay_history

use simon_core::game::{GameMachine, GameState, ReplayMode};
use simon_core::Signal;

/// Complete `levels` full levels, then fail on the first click.
fn play_run(game: &mut GameMachine, levels: u32) {
    game.request_timer(ReplayMode::Fresh);
    game.timer_ready();
    for _ in 0..levels {
        game.sequence_over();
        for signal in game.sequence().to_vec() {
            game.click(signal);
        }
        game.next_level();
    }
    game.sequence_over();
    let expected = game.sequence()[0];
    let wrong = Signal::ALL
        .into_iter()
        .find(|&s| s != expected)
        .unwrap_or(Signal::Red);
    game.click(wrong);
    game.end();
}

fn main() {
    println!("=== Simon Core: Replay History ===\n");

    let mut game = GameMachine::with_seed(99);
    game.init();

    play_run(&mut game, 4);
    play_run(&mut game, 1);

    let last = game.history().replay_last().expect("two runs finished");
    let longest = game.history().replay_longest().expect("two runs finished");
    println!("last run reached level {}", last.level_reached());
    println!("longest run reached level {}", longest.level_reached());

    println!("\nReplaying the longest run:");
    game.request_timer(ReplayMode::Longest);
    game.timer_ready();
    assert_eq!(game.state(), GameState::Started);
    println!(
        "  level {} with sequence: {}",
        game.level().level(),
        game.sequence()
            .iter()
            .map(Signal::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    println!("\n=== Example Complete ===");
}
