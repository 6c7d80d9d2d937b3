use crate::action::{Action, ActionError};
use crate::pawn::Pawn;
use crate::world::World;

/// Moves the pawn along one of its current location's outgoing connections.
///
/// The direction is resolved at execution time against the pawn's location,
/// so a move that was legal when generated fails cleanly if the pawn has
/// since gone elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveAction {
    direction: String,
}

impl MoveAction {
    pub fn new(direction: impl Into<String>) -> Self {
        Self {
            direction: direction.into(),
        }
    }

    pub fn direction(&self) -> &str {
        &self.direction
    }
}

impl Action for MoveAction {
    fn execute(&self, world: &World, pawn: &mut Pawn) -> Result<(), ActionError> {
        let here = world.location(pawn.location());
        match here.connection(&self.direction) {
            Some(target) => {
                pawn.set_location(target);
                Ok(())
            }
            None => Err(ActionError::InvalidAction {
                action: self.describe(),
                reason: format!("no connection {} from {}", self.direction, here.name()),
            }),
        }
    }

    fn describe(&self) -> String {
        format!("move {}", self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{ConnectionRecord, LocationRecord};

    fn two_room_world() -> World {
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
    fn move_follows_a_declared_connection() {
        let world = two_room_world();
        let mut pawn = Pawn::new(world.initial_location());

        pawn.perform(&world, &MoveAction::new("north"))
            .expect("north is connected from Start");

        assert_eq!(pawn.location(), world.find("Hall").unwrap());
    }

    #[test]
    fn move_and_return() {
        let world = two_room_world();
        let mut pawn = Pawn::new(world.initial_location());

        pawn.perform(&world, &MoveAction::new("north")).unwrap();
        pawn.perform(&world, &MoveAction::new("south")).unwrap();

        assert_eq!(pawn.location(), world.initial_location());
    }

    #[test]
    fn undeclared_direction_fails_and_leaves_pawn_in_place() {
        let world = two_room_world();
        let hall = world.find("Hall").unwrap();
        let mut pawn = Pawn::new(hall);

        let err = pawn
            .perform(&world, &MoveAction::new("east"))
            .expect_err("east is not connected from Hall");

        assert!(matches!(err, ActionError::InvalidAction { .. }));
        assert_eq!(pawn.location(), hall, "failed moves must not move the pawn");
    }

    #[test]
    fn stale_move_fails_after_the_pawn_relocated() {
        let world = two_room_world();
        let mut pawn = Pawn::new(world.initial_location());
        let stale = MoveAction::new("north");

        pawn.perform(&world, &stale).unwrap();
        // Second execution resolves against Hall, which has no "north".
        let err = pawn.perform(&world, &stale).expect_err("move went stale");

        assert!(matches!(err, ActionError::InvalidAction { .. }));
        assert_eq!(pawn.location(), world.find("Hall").unwrap());
    }
}
