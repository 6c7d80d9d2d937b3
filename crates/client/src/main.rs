//! Adventure game client binary.
//!
//! The composition root: loads configuration, builds the world from location
//! data, assembles the game with the chosen strategy and the console
//! observer, and drives the turn loop.

mod config;
mod data;
mod interactive;
mod observer;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use game_core::World;
use runtime::{Game, SelectActionStrategy};

use crate::config::ClientConfig;
use crate::interactive::InteractiveStrategy;
use crate::observer::CliObserver;

#[derive(Debug, Parser)]
#[command(name = "adventure", about = "Turn-based adventure game")]
struct Options {
    /// Action-selection strategy: last, random, or interactive
    #[arg(short, long)]
    pub(crate) strategy: Option<String>,

    /// Path to a world description (JSON); omit for the built-in dungeon
    #[arg(short, long)]
    pub(crate) world: Option<std::path::PathBuf>,

    /// Player name
    #[arg(short, long)]
    pub(crate) player: Option<String>,

    /// Maximum number of turns before the session ends
    #[arg(short, long)]
    pub(crate) turns: Option<u32>,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging()?;

    let config = ClientConfig::from_env().merge(Options::parse());
    tracing::info!(strategy = %config.strategy, turns = config.max_turns, "starting adventure client");

    let world_file = match &config.world {
        Some(path) => data::load_world_file(path)
            .with_context(|| format!("failed to load world from {}", path.display()))?,
        None => data::default_world(),
    };
    let world = World::build(world_file.locations, &world_file.initial)
        .context("world data is malformed")?;

    let strategy = resolve_strategy(&config.strategy)?;

    let mut game = Game::new(world);
    game.add_player(config.player_name.clone(), strategy);

    let observer = Arc::new(CliObserver::new());
    game.attach_observer(observer.clone());

    let summary = game.run(config.max_turns)?;

    if summary.quit {
        println!("Goodbye!");
    } else {
        println!("Session over after {} turns.", summary.turns_played);
    }
    Ok(())
}

/// Resolves the strategy name; "interactive" is provided by this client, the
/// rest by the runtime registry.
fn resolve_strategy(name: &str) -> Result<Box<dyn SelectActionStrategy>> {
    if name == "interactive" {
        return Ok(Box::new(InteractiveStrategy::new()));
    }
    Ok(runtime::strategy::from_name(name)?)
}

/// Log to stderr so game output on stdout stays readable.
fn setup_logging() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();

    Ok(())
}
