use game_core::BoxedAction;

use super::{SelectActionStrategy, SelectionContext, SelectionError};

/// Deterministic placeholder: always takes the last legal action.
///
/// Since the skip-turn action is appended last, this player stands still
/// forever, which makes it a predictable baseline for tests and demos.
#[derive(Clone, Copy, Debug, Default)]
pub struct LastActionStrategy;

impl SelectActionStrategy for LastActionStrategy {
    fn select(
        &mut self,
        mut actions: Vec<BoxedAction>,
        _ctx: &SelectionContext<'_>,
    ) -> Result<BoxedAction, SelectionError> {
        actions
            .pop()
            .ok_or_else(|| SelectionError::Failed("empty action set".to_string()))
    }

    fn name(&self) -> &'static str {
        "last"
    }

    fn description(&self) -> &'static str {
        "Always picks the last entry in the list of legal actions"
    }
}

#[cfg(test)]
mod tests {
    use game_core::{MoveAction, Pawn, SkipTurnAction, World};

    use super::*;

    #[test]
    fn picks_the_last_entry() {
        let world = World::build(
            vec![game_core::LocationRecord {
                name: "Cell".to_string(),
                description: String::new(),
                connections: Vec::new(),
            }],
            "Cell",
        )
        .unwrap();
        let pawn = Pawn::new(world.initial_location());
        let ctx = SelectionContext {
            player_name: "P",
            world: &world,
            pawn: &pawn,
        };
        let actions: Vec<BoxedAction> =
            vec![Box::new(MoveAction::new("north")), Box::new(SkipTurnAction)];

        let selected = LastActionStrategy.select(actions, &ctx).unwrap();

        assert_eq!(selected.describe(), "skip turn");
    }
}
