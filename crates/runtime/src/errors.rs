//! Unified error types surfaced by the session layer.

use thiserror::Error;

use crate::ids::PlayerId;

/// Fatal per-turn failures. Recoverable conditions (a rejected action, a
/// quit request) are [`TurnOutcome`](crate::TurnOutcome) values, not errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The legal-action generator returned nothing. Skip-turn is always
    /// legal, so this indicates a bug, not a user-recoverable state.
    #[error("no legal actions for player {player}")]
    NoLegalActions { player: String },

    #[error("action selection failed for player {player}: {reason}")]
    Selection { player: String, reason: String },
}

/// Errors surfaced by the [`Game`](crate::Game) controller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("turn failed")]
    Turn(#[from] TurnError),

    #[error("unknown player id {0:?}")]
    UnknownPlayer(PlayerId),
}
