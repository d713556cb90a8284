//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic machine declared with the
//! `automaton!` macro.
//!
//! Key concepts:
//! - Events exposed as methods
//! - Accepting states
//! - Rejected events leave the machine untouched
//! - Checkpointing an instance
//!
//! Run with: cargo run --example traffic_light

use automaton::automaton;

automaton! {
    struct TrafficLight {
        initial: "red",
        accepting: ["red", "green"],
        events {
            go: "red" => "green",
            slowdown: "green" => "yellow",
            stop: "yellow" => "red",
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Traffic Light State Machine ===\n");

    let definition = TrafficLight::definition()?;
    let states: Vec<_> = definition.states().iter().map(|s| s.as_str()).collect();
    let events: Vec<_> = definition.event_names().collect();
    println!("States: {:?}", states);
    println!("Events: {:?}\n", events);

    let mut light = TrafficLight::new()?;
    println!("Initial state: {} (accepted: {})", light.state(), light.is_accepted());

    for step in [TrafficLight::go, TrafficLight::slowdown, TrafficLight::stop] {
        let transition = step(&mut light)?;
        println!(
            "  {:<9} {} -> {} (accepted: {})",
            transition.event,
            transition.from,
            transition.to,
            light.is_accepted()
        );
    }

    println!("\nTrying 'stop' while {}:", light.state());
    match light.stop() {
        Ok(_) => println!("  unexpectedly allowed"),
        Err(e) => println!("  rejected: {}", e),
    }
    println!("  state is still {}", light.state());

    let checkpoint = light.checkpoint();
    println!("\nCheckpoint:\n{}", checkpoint.to_json()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
