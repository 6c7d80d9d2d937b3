//! World data loading.
//!
//! The core consumes plain location records; where they come from is this
//! module's business. Either a JSON file supplied by the user or the built-in
//! dungeon shipped with the client.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use game_core::{ConnectionRecord, LocationRecord};

/// On-disk world description: a list of location records plus the name of the
/// starting location.
#[derive(Debug, Deserialize)]
pub struct WorldFile {
    pub initial: String,
    pub locations: Vec<LocationRecord>,
}

pub fn load_world_file(path: &Path) -> Result<WorldFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let file: WorldFile = serde_json::from_str(&raw)
        .with_context(|| format!("invalid world description in {}", path.display()))?;
    Ok(file)
}

/// The built-in dungeon used when no world file is given.
pub fn default_world() -> WorldFile {
    fn location(name: &str, description: &str, connections: &[(&str, &str)]) -> LocationRecord {
        LocationRecord {
            name: name.to_string(),
            description: description.to_string(),
            connections: connections
                .iter()
                .map(|(direction, target)| ConnectionRecord {
                    direction: direction.to_string(),
                    target: target.to_string(),
                })
                .collect(),
        }
    }

    WorldFile {
        initial: "Entrance Hall".to_string(),
        locations: vec![
            location(
                "Entrance Hall",
                "A dusty hall. Daylight fades behind you.",
                &[("north", "Dark Corridor")],
            ),
            location(
                "Dark Corridor",
                "Narrow walls swallow the torchlight.",
                &[
                    ("south", "Entrance Hall"),
                    ("east", "Armory"),
                    ("north", "Brittle Bridge"),
                ],
            ),
            location(
                "Armory",
                "Rusted racks and a single serviceable sword.",
                &[("west", "Dark Corridor")],
            ),
            location(
                "Brittle Bridge",
                "The planks creak over a black chasm.",
                &[("south", "Dark Corridor"), ("north", "Treasure Chamber")],
            ),
            location(
                "Treasure Chamber",
                "Gold glitters in heaps around a sleeping dragon.",
                // One-way drop: jumping down the shaft is not reversible.
                &[("south", "Brittle Bridge"), ("down", "Entrance Hall")],
            ),
        ],
    }
}
