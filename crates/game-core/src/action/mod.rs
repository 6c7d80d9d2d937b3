//! The action hierarchy: everything a pawn can do in a turn.
//!
//! Actions are transient command objects. They are created fresh each turn by
//! the legal-action generator, carry the data they need to execute, and are
//! discarded afterwards. New kinds slot in by implementing [`Action`]; no
//! central dispatch has to change.

pub mod kinds;

use thiserror::Error;

use crate::pawn::Pawn;
use crate::world::World;

pub use kinds::{MoveAction, SkipTurnAction};

/// Errors surfaced while executing an action against a pawn.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not valid for the pawn's current state, e.g. a stale
    /// move after the pawn already changed location. The pawn is untouched.
    #[error("cannot {action}: {reason}")]
    InvalidAction { action: String, reason: String },
}

/// A single player-performable operation.
///
/// Execution either applies the full effect or fails leaving the pawn
/// unchanged; there are no partial moves.
pub trait Action: Send {
    fn execute(&self, world: &World, pawn: &mut Pawn) -> Result<(), ActionError>;

    /// Display text for UIs and logs.
    fn describe(&self) -> String;
}

pub type BoxedAction = Box<dyn Action>;

/// Enumerates every action currently valid for the pawn: one move per
/// outgoing connection (in direction order) plus skipping the turn.
///
/// Recomputed fresh on every call; the world is static but the pawn's
/// position is not. Each returned action is guaranteed to succeed if it is
/// executed before the pawn moves again.
pub fn legal_actions(world: &World, pawn: &Pawn) -> Vec<BoxedAction> {
    let here = world.location(pawn.location());
    let mut actions: Vec<BoxedAction> = here
        .connections()
        .map(|(direction, _)| Box::new(MoveAction::new(direction)) as BoxedAction)
        .collect();
    actions.push(Box::new(SkipTurnAction));
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{ConnectionRecord, LocationRecord};

    fn start_hall_world() -> World {
        World::build(
            vec![
                LocationRecord {
                    name: "Start".to_string(),
                    description: String::new(),
                    connections: vec![ConnectionRecord {
                        direction: "north".to_string(),
                        target: "Hall".to_string(),
                    }],
                },
                LocationRecord {
                    name: "Hall".to_string(),
                    description: String::new(),
                    connections: vec![ConnectionRecord {
                        direction: "south".to_string(),
                        target: "Start".to_string(),
                    }],
                },
            ],
            "Start",
        )
        .unwrap()
    }

    #[test]
    fn legal_actions_cover_connections_plus_skip() {
        let world = start_hall_world();
        let pawn = Pawn::new(world.initial_location());

        let actions = legal_actions(&world, &pawn);
        let descriptions: Vec<String> = actions.iter().map(|action| action.describe()).collect();

        assert_eq!(descriptions, ["move north", "skip turn"]);
    }

    #[test]
    fn every_legal_action_succeeds_when_executed() {
        let world = start_hall_world();
        let pawn = Pawn::new(world.initial_location());

        for action in legal_actions(&world, &pawn) {
            let mut probe = pawn;
            probe
                .perform(&world, action.as_ref())
                .expect("legal actions must execute cleanly");
        }
    }

    #[test]
    fn legal_actions_track_the_pawn_position() {
        let world = start_hall_world();
        let hall = world.find("Hall").unwrap();
        let pawn = Pawn::new(hall);

        let descriptions: Vec<String> = legal_actions(&world, &pawn)
            .iter()
            .map(|action| action.describe())
            .collect();

        assert_eq!(descriptions, ["move south", "skip turn"]);
    }
}
