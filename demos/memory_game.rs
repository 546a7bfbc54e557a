//! Memory Game Progress
//!
//! This example wires console stand-ins for the game's banner and action
//! button to the progress machine, then presses the button a few times.
//!
//! Key concepts:
//! - Subscribing presentation code to phase hooks
//! - A shared handle passed to the component that triggers the machine
//! - Cyclic phases with no final state
//!
//! Run with: RUST_LOG=recollect=debug cargo run --example memory_game

use recollect::progress::{ProgressKey, SharedProgress};
use std::cell::RefCell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

/// What the player would see on screen.
#[derive(Debug, Default)]
struct Screen {
    banner: String,
    button: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Memory Game Progress ===\n");

    let progress = SharedProgress::new();
    let screen = Rc::new(RefCell::new(Screen {
        banner: "Click Start To Begin".to_string(),
        button: "Start".to_string(),
    }));

    for (key, banner, button) in [
        (ProgressKey::Start, "Click Start To Begin", "Start"),
        (ProgressKey::Memorize, "Memorize!", "Go!"),
        (ProgressKey::Restart, "Choose the Correct Pairs!", "Restart"),
    ] {
        let screen = Rc::clone(&screen);
        progress.subscribe(key, move || {
            let mut screen = screen.borrow_mut();
            screen.banner = banner.to_string();
            screen.button = button.to_string();
        })?;
    }

    progress.subscribe(ProgressKey::Memorize, || println!("  (avatars revealed)"))?;
    progress.subscribe(ProgressKey::Restart, || println!("  (names shuffled)"))?;

    let button = progress.clone();
    println!("Phase: {}", progress.current_key()?);
    println!("  banner: {:?}  button: {:?}\n", screen.borrow().banner, screen.borrow().button);

    for _ in 0..4 {
        let phase = button.action_trigger()?;
        let screen = screen.borrow();
        println!("Phase: {phase}");
        println!("  banner: {:?}  button: {:?}\n", screen.banner, screen.button);
    }

    let reachable = progress.with(|machine| machine.reachable_states())?;
    println!("Phases reachable from here: {reachable:?}");

    println!("\n=== Example Complete ===");
    Ok(())
}
