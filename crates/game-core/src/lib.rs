pub mod action;
pub mod pawn;
pub mod world;

pub use action::{Action, ActionError, BoxedAction, MoveAction, SkipTurnAction, legal_actions};
pub use pawn::Pawn;
pub use world::{ConnectionRecord, Location, LocationId, LocationRecord, World, WorldError};
