//! Basic Game Walkthrough
//!
//! Drives the game core through a few levels the way a host would,
//! with a listener printing every broadcast state change.
//!
//! Key concepts:
//! - Command/notification round trips
//! - Append-only sequence growth
//! - Level and timer progression
//!
//! Run with: cargo run --example basic_game

use simon_core::core::State;
use simon_core::game::{GameMachine, GameState};
use simon_core::Signal;
use std::sync::Arc;

fn main() {
    println!("=== Simon Core: Basic Game ===\n");

    let mut game = GameMachine::with_seed(2024);
    game.subscribe(Arc::new(|state: &GameState| {
        println!("  [notify] -> {}", state.name());
    }));

    game.init();
    game.start();

    // Play three levels correctly.
    for _ in 0..3 {
        println!(
            "\nLevel {} | {} signal(s) | {}s budget",
            game.level().level(),
            game.level().count(),
            game.time()
        );
        let sequence: Vec<Signal> = game.sequence().to_vec();
        println!(
            "Presenting: {}",
            sequence
                .iter()
                .map(Signal::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        game.sequence_over();
        for signal in sequence {
            println!("Player clicks {signal}");
            game.click(signal);
        }
        game.next_level();
    }

    // Fail on purpose at level 4.
    game.sequence_over();
    let expected = game.sequence()[0];
    let wrong = Signal::ALL
        .into_iter()
        .find(|&s| s != expected)
        .unwrap_or(Signal::Red);
    println!("\nPlayer clicks {wrong} (expected {expected})");
    game.click(wrong);

    let last = game.history().replay_last().expect("run just ended");
    println!(
        "\nRun over: reached level {}, sequence length {}",
        last.level_reached(),
        last.sequence().len()
    );

    game.end();
    println!("\n=== Walkthrough Complete ===");
}
