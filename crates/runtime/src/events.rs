//! Turn outcomes pushed to observers.

/// What happened when a player took a turn.
///
/// Failed actions are an outcome, not an error: they are reported through the
/// observer channel and the session keeps running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The selected action executed; `location` names where the pawn ended up.
    ActionExecuted { action: String, location: String },
    /// The selected action was rejected; the pawn did not move.
    ActionFailed { action: String, error: String },
    /// The player's strategy asked to leave the game.
    PlayerQuit,
}
