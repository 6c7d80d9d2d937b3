//! Console observer: the only place the core's notifications meet stdout.

use game_core::BoxedAction;
use runtime::{PlayerObserver, TurnOutcome};

/// Prints possible actions as a numbered menu and turn outcomes as prose.
#[derive(Debug, Default)]
pub struct CliObserver;

impl CliObserver {
    pub fn new() -> Self {
        Self
    }
}

impl PlayerObserver for CliObserver {
    fn note_possible_actions(&self, player: &str, actions: &[BoxedAction]) {
        println!("{player} can:");
        for (i, action) in actions.iter().enumerate() {
            println!("  {}: {}", i + 1, action.describe());
        }
    }

    fn note_turn_outcome(&self, player: &str, outcome: &TurnOutcome) {
        match outcome {
            TurnOutcome::ActionExecuted { action, location } => {
                println!("{player}: {action} -> now at {location}");
            }
            TurnOutcome::ActionFailed { action, error } => {
                println!("{player}: {action} failed ({error})");
            }
            TurnOutcome::PlayerQuit => {
                println!("{player} leaves the game.");
            }
        }
    }
}
