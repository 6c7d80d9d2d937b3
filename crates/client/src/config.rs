//! Client configuration: environment defaults, CLI overrides.

use std::env;
use std::path::PathBuf;

use crate::Options;

/// Settings for one client session.
///
/// Environment variables supply defaults; command-line flags win.
///
/// - `ADVENTURE_STRATEGY` - action-selection strategy name (default: "random")
/// - `ADVENTURE_WORLD` - path to a world JSON file (default: built-in dungeon)
/// - `ADVENTURE_PLAYER` - player name (default: "Adventurer")
/// - `ADVENTURE_MAX_TURNS` - turn limit (default: 10)
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub strategy: String,
    pub world: Option<PathBuf>,
    pub player_name: String,
    pub max_turns: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            strategy: "random".to_string(),
            world: None,
            player_name: "Adventurer".to_string(),
            max_turns: 10,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(strategy) = env::var("ADVENTURE_STRATEGY") {
            config.strategy = strategy;
        }
        config.world = env::var("ADVENTURE_WORLD").ok().map(PathBuf::from);
        if let Ok(player) = env::var("ADVENTURE_PLAYER") {
            config.player_name = player;
        }
        if let Some(turns) = read_env::<u32>("ADVENTURE_MAX_TURNS") {
            config.max_turns = turns.max(1);
        }

        config
    }

    /// Applies command-line options on top of the environment defaults.
    pub fn merge(mut self, options: Options) -> Self {
        if let Some(strategy) = options.strategy {
            self.strategy = strategy;
        }
        if let Some(world) = options.world {
            self.world = Some(world);
        }
        if let Some(player) = options.player {
            self.player_name = player;
        }
        if let Some(turns) = options.turns {
            self.max_turns = turns.max(1);
        }
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
