//! Top-level session controller.
//!
//! The single entry point for external callers: owns the world and the
//! players, drives the turn loop, and forms the error boundary between
//! per-turn outcomes (reported, then play continues) and fatal failures
//! (propagated).

use std::sync::{Arc, Weak};

use game_core::{Pawn, World};

use crate::errors::GameError;
use crate::events::TurnOutcome;
use crate::ids::{IdAllocator, PlayerId};
use crate::observer::PlayerObserver;
use crate::player::Player;
use crate::strategy::SelectActionStrategy;

/// How a finished session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSummary {
    /// Completed rounds (every player took a turn).
    pub turns_played: u32,
    /// True when a player quit before the turn limit.
    pub quit: bool,
}

pub struct Game {
    world: World,
    players: Vec<Player>,
    // Weak so the session never extends an observer's lifetime; kept only to
    // fan out to players added later.
    observers: Vec<Weak<dyn PlayerObserver>>,
    ids: IdAllocator,
}

impl Game {
    pub fn new(world: World) -> Self {
        Self {
            world,
            players: Vec::new(),
            observers: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Adds a player whose pawn starts at the world's initial location.
    /// Observers attached to the game are carried over to the new player.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        strategy: Box<dyn SelectActionStrategy>,
    ) -> PlayerId {
        let id = self.ids.allocate();
        let name = name.into();
        tracing::info!(player = %name, strategy = strategy.name(), "player joined");
        let mut player = Player::new(id, name, Pawn::new(self.world.initial_location()), strategy);
        for weak in &self.observers {
            if let Some(observer) = weak.upgrade() {
                player.attach_observer(observer);
            }
        }
        self.players.push(player);
        id
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        self.players
            .iter_mut()
            .find(|player| player.id() == id)
            .ok_or(GameError::UnknownPlayer(id))
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Attaches an observer to every current player and remembers it (weakly)
    /// for players added later.
    pub fn attach_observer(&mut self, observer: Arc<dyn PlayerObserver>) {
        for player in &mut self.players {
            player.attach_observer(observer.clone());
        }
        self.observers.push(Arc::downgrade(&observer));
    }

    pub fn detach_observer(&mut self, observer: Arc<dyn PlayerObserver>) {
        for player in &mut self.players {
            player.detach_observer(observer.clone());
        }
        self.observers.retain(|weak| {
            weak.upgrade().is_some_and(|live| {
                !std::ptr::eq(Arc::as_ptr(&live) as *const (), Arc::as_ptr(&observer) as *const ())
            })
        });
    }

    /// Swaps a player's strategy at runtime.
    pub fn set_strategy(
        &mut self,
        id: PlayerId,
        strategy: Box<dyn SelectActionStrategy>,
    ) -> Result<(), GameError> {
        self.player_mut(id)?.set_strategy(strategy);
        Ok(())
    }

    /// Runs a single turn for one player. Useful for UIs that pace the loop
    /// themselves.
    pub fn take_turn(&mut self, id: PlayerId) -> Result<TurnOutcome, GameError> {
        let world = &self.world;
        let player = self
            .players
            .iter_mut()
            .find(|player| player.id() == id)
            .ok_or(GameError::UnknownPlayer(id))?;
        Ok(player.take_turn(world)?)
    }

    /// Drives the session for at most `max_turns` rounds.
    ///
    /// Rejected actions have already been reported to observers by the player
    /// and do not stop the loop; a quit ends the session cleanly; fatal turn
    /// errors propagate.
    pub fn run(&mut self, max_turns: u32) -> Result<GameSummary, GameError> {
        for turn in 0..max_turns {
            tracing::info!(turn = turn + 1, "turn started");
            let world = &self.world;
            for player in &mut self.players {
                match player.take_turn(world)? {
                    TurnOutcome::PlayerQuit => {
                        return Ok(GameSummary {
                            turns_played: turn,
                            quit: true,
                        });
                    }
                    TurnOutcome::ActionFailed { action, error } => {
                        tracing::warn!(player = %player.name(), %action, %error, "action rejected");
                    }
                    TurnOutcome::ActionExecuted { .. } => {}
                }
            }
        }
        Ok(GameSummary {
            turns_played: max_turns,
            quit: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use game_core::{BoxedAction, ConnectionRecord, LocationRecord};

    use super::*;
    use crate::strategy::{
        LastActionStrategy, SelectActionStrategy, SelectionContext, SelectionError,
    };

    fn loop_world() -> World {
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
    fn players_start_at_the_initial_location() {
        let mut game = Game::new(loop_world());
        let id = game.add_player("Alice", Box::new(LastActionStrategy));

        let player = game.player(id).unwrap();
        assert_eq!(player.pawn().location(), game.world().initial_location());
    }

    #[test]
    fn run_completes_the_requested_number_of_turns() {
        let mut game = Game::new(loop_world());
        game.add_player("Alice", Box::new(LastActionStrategy));
        game.add_player("Bob", Box::new(LastActionStrategy));

        let summary = game.run(5).unwrap();

        assert_eq!(
            summary,
            GameSummary {
                turns_played: 5,
                quit: false
            }
        );
    }

    #[derive(Debug)]
    struct QuitOnSecondTurn {
        turns: u32,
    }

    impl SelectActionStrategy for QuitOnSecondTurn {
        fn select(
            &mut self,
            mut actions: Vec<BoxedAction>,
            _ctx: &SelectionContext<'_>,
        ) -> Result<BoxedAction, SelectionError> {
            self.turns += 1;
            if self.turns >= 2 {
                return Err(SelectionError::QuitRequested);
            }
            actions
                .pop()
                .ok_or_else(|| SelectionError::Failed("empty action set".to_string()))
        }

        fn name(&self) -> &'static str {
            "quit-on-second"
        }
    }

    #[test]
    fn quitting_ends_the_session_early() {
        let mut game = Game::new(loop_world());
        game.add_player("Alice", Box::new(QuitOnSecondTurn { turns: 0 }));

        let summary = game.run(10).unwrap();

        assert!(summary.quit);
        assert_eq!(summary.turns_played, 1);
    }

    #[test]
    fn unknown_player_ids_are_rejected() {
        let mut game = Game::new(loop_world());

        let err = game.take_turn(PlayerId(42)).expect_err("no such player");

        assert_eq!(err, GameError::UnknownPlayer(PlayerId(42)));
    }

    #[test]
    fn strategies_can_be_swapped_at_runtime() {
        let mut game = Game::new(loop_world());
        let id = game.add_player("Alice", Box::new(LastActionStrategy));

        game.set_strategy(id, Box::new(QuitOnSecondTurn { turns: 9 }))
            .unwrap();

        assert_eq!(game.player(id).unwrap().strategy_name(), "quit-on-second");
        assert_eq!(game.take_turn(id).unwrap(), TurnOutcome::PlayerQuit);
    }
}
