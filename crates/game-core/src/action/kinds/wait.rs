use crate::action::{Action, ActionError};
use crate::pawn::Pawn;
use crate::world::World;

/// Does nothing for a turn. Always legal, always succeeds, which keeps the
/// legal-action set non-empty in every reachable state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkipTurnAction;

impl Action for SkipTurnAction {
    fn execute(&self, _world: &World, _pawn: &mut Pawn) -> Result<(), ActionError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "skip turn".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::LocationRecord;

    #[test]
    fn skip_turn_is_a_no_op() {
        let world = World::build(
            vec![LocationRecord {
                name: "Cell".to_string(),
                description: String::new(),
                connections: Vec::new(),
            }],
            "Cell",
        )
        .unwrap();
        let mut pawn = Pawn::new(world.initial_location());

        pawn.perform(&world, &SkipTurnAction).unwrap();

        assert_eq!(pawn.location(), world.initial_location());
    }
}
