//! Built-in action kinds.

pub mod movement;
pub mod wait;

pub use movement::MoveAction;
pub use wait::SkipTurnAction;
