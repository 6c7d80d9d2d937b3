use crate::action::{Action, ActionError};
use crate::world::{LocationId, World};

/// The player's movable token, bound to exactly one location at a time.
///
/// The current location is a handle into the world the pawn was created
/// against; it is never dangling because the world is frozen after build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pawn {
    location: LocationId,
}

impl Pawn {
    pub fn new(location: LocationId) -> Self {
        Self { location }
    }

    pub fn location(&self) -> LocationId {
        self.location
    }

    /// Minimal mutation surface needed by actions.
    pub fn set_location(&mut self, location: LocationId) {
        self.location = location;
    }

    /// Applies an action to this pawn. The pawn holds no action-specific
    /// logic; everything an action needs lives in the action itself.
    pub fn perform(&mut self, world: &World, action: &dyn Action) -> Result<(), ActionError> {
        action.execute(world, self)
    }
}
