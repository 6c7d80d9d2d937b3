//! The player: owns a pawn, a strategy, and the observer list.

use std::sync::Arc;

use game_core::{BoxedAction, Pawn, World, legal_actions};

use crate::errors::TurnError;
use crate::events::TurnOutcome;
use crate::ids::PlayerId;
use crate::observer::{ObserverRegistry, PlayerObserver};
use crate::strategy::{SelectActionStrategy, SelectionContext, SelectionError};

/// A participant in the session: exactly one pawn, one strategy (swappable,
/// never absent), and a list of weakly-held observers.
pub struct Player {
    id: PlayerId,
    name: String,
    pawn: Pawn,
    strategy: Box<dyn SelectActionStrategy>,
    observers: ObserverRegistry,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        pawn: Pawn,
        strategy: Box<dyn SelectActionStrategy>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            pawn,
            strategy,
            observers: ObserverRegistry::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pawn(&self) -> &Pawn {
        &self.pawn
    }

    /// Swaps the action-selection policy at runtime.
    pub fn set_strategy(&mut self, strategy: Box<dyn SelectActionStrategy>) {
        tracing::debug!(player = %self.name, strategy = strategy.name(), "strategy swapped");
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn attach_observer(&mut self, observer: Arc<dyn PlayerObserver>) {
        self.observers.attach(observer);
    }

    pub fn detach_observer(&mut self, observer: Arc<dyn PlayerObserver>) {
        self.observers.detach(observer);
    }

    /// Enumerates the actions legal for this player right now and pushes the
    /// list to all live observers.
    pub fn legal_actions(&mut self, world: &World) -> Vec<BoxedAction> {
        let actions = legal_actions(world, &self.pawn);
        self.observers.notify_possible_actions(&self.name, &actions);
        actions
    }

    /// Runs one full turn: enumerate, notify, select, perform, report.
    ///
    /// A rejected action leaves the pawn in place and comes back as
    /// [`TurnOutcome::ActionFailed`]; only invariant violations are errors.
    pub fn take_turn(&mut self, world: &World) -> Result<TurnOutcome, TurnError> {
        let actions = self.legal_actions(world);
        if actions.is_empty() {
            return Err(TurnError::NoLegalActions {
                player: self.name.clone(),
            });
        }

        let ctx = SelectionContext {
            player_name: &self.name,
            world,
            pawn: &self.pawn,
        };
        let selected = match self.strategy.select(actions, &ctx) {
            Ok(action) => action,
            Err(SelectionError::QuitRequested) => {
                tracing::info!(player = %self.name, "player quit");
                let outcome = TurnOutcome::PlayerQuit;
                self.observers.notify_turn_outcome(&self.name, &outcome);
                return Ok(outcome);
            }
            Err(SelectionError::Failed(reason)) => {
                return Err(TurnError::Selection {
                    player: self.name.clone(),
                    reason,
                });
            }
        };

        let action = selected.describe();
        tracing::debug!(player = %self.name, %action, "action selected");

        let outcome = match self.pawn.perform(world, selected.as_ref()) {
            Ok(()) => TurnOutcome::ActionExecuted {
                action,
                location: world.location(self.pawn.location()).name().to_string(),
            },
            Err(err) => TurnOutcome::ActionFailed {
                action,
                error: err.to_string(),
            },
        };
        self.observers.notify_turn_outcome(&self.name, &outcome);
        Ok(outcome)
    }
}
