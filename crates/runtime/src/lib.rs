//! Session orchestration on top of the `game-core` domain model.
//!
//! This crate wires players, pluggable action-selection strategies, and the
//! observer notification plumbing into a cohesive session API. Consumers embed
//! [`Game`] to drive the turn loop, or call [`Player::take_turn`] directly
//! when a UI wants to pace turns itself.

pub mod errors;
pub mod events;
pub mod game;
pub mod ids;
pub mod observer;
pub mod player;
pub mod strategy;

pub use errors::{GameError, TurnError};
pub use events::TurnOutcome;
pub use game::{Game, GameSummary};
pub use ids::{IdAllocator, PlayerId};
pub use observer::{ObserverRegistry, PlayerObserver};
pub use player::Player;
pub use strategy::{
    LastActionStrategy, RandomStrategy, SelectActionStrategy, SelectionContext, SelectionError,
    UnknownStrategy,
};
