//! Human-driven action selection.
//!
//! The action menu itself reaches the user through [`CliObserver`]'s
//! `note_possible_actions`; this strategy only reads the choice back. The
//! core stays unaware that a human is on the other end.

use std::io::{self, BufRead, Write};

use game_core::BoxedAction;
use runtime::{SelectActionStrategy, SelectionContext, SelectionError};

/// Prompts on stdin for an action index; `q` quits the session.
#[derive(Debug, Default)]
pub struct InteractiveStrategy;

impl InteractiveStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl SelectActionStrategy for InteractiveStrategy {
    fn select(
        &mut self,
        mut actions: Vec<BoxedAction>,
        ctx: &SelectionContext<'_>,
    ) -> Result<BoxedAction, SelectionError> {
        let stdin = io::stdin();
        loop {
            print!(
                "{}, choose an action (1-{}, q to quit): ",
                ctx.player_name,
                actions.len()
            );
            io::stdout()
                .flush()
                .map_err(|err| SelectionError::Failed(err.to_string()))?;

            let mut line = String::new();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .map_err(|err| SelectionError::Failed(err.to_string()))?;
            if read == 0 {
                // Stdin closed; treat like a quit instead of looping forever.
                return Err(SelectionError::QuitRequested);
            }

            let input = line.trim();
            if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
                return Err(SelectionError::QuitRequested);
            }
            match input.parse::<usize>() {
                Ok(choice) if (1..=actions.len()).contains(&choice) => {
                    return Ok(actions.swap_remove(choice - 1));
                }
                _ => println!("Please enter a number between 1 and {}.", actions.len()),
            }
        }
    }

    fn name(&self) -> &'static str {
        "interactive"
    }

    fn description(&self) -> &'static str {
        "Defers every choice to the human at the terminal"
    }
}
