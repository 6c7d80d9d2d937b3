//! Pluggable action-selection policies.
//!
//! A strategy is handed the legal actions for the turn and picks exactly one.
//! Implementations range from the deterministic placeholder used in tests to
//! interactive collaborators that defer to a human; the player never knows
//! which one it holds.

pub mod last_action;
pub mod random;

use thiserror::Error;

use game_core::{BoxedAction, Pawn, World};

pub use last_action::LastActionStrategy;
pub use random::RandomStrategy;

/// Read-only facts a strategy may consult while choosing.
pub struct SelectionContext<'a> {
    pub player_name: &'a str,
    pub world: &'a World,
    pub pawn: &'a Pawn,
}

/// Why a strategy declined to choose an action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The collaborator behind the strategy wants to end the session. Not a
    /// failure; surfaced as a clean stop.
    #[error("player requested to quit")]
    QuitRequested,
    #[error("action selection failed: {0}")]
    Failed(String),
}

/// Policy object that selects one action from the legal set each turn.
///
/// `actions` is never empty when called through
/// [`Player::take_turn`](crate::Player::take_turn).
pub trait SelectActionStrategy: Send + std::fmt::Debug {
    fn select(
        &mut self,
        actions: Vec<BoxedAction>,
        ctx: &SelectionContext<'_>,
    ) -> Result<BoxedAction, SelectionError>;

    /// Strategy name for logs and UI display.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        "No description available"
    }
}

/// Raised when [`from_name`] does not recognize a strategy name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown strategy: {name}")]
pub struct UnknownStrategy {
    pub name: String,
}

/// Resolves a strategy by name.
///
/// Supported names: `"last"` (deterministic placeholder) and `"random"`
/// (uniform pick). Interactive strategies live with the UI that provides
/// them and are wired up by the caller directly.
pub fn from_name(name: &str) -> Result<Box<dyn SelectActionStrategy>, UnknownStrategy> {
    match name {
        "last" => Ok(Box::new(LastActionStrategy)),
        "random" => Ok(Box::new(RandomStrategy::new())),
        other => Err(UnknownStrategy {
            name: other.to_string(),
        }),
    }
}
