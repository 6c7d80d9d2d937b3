//! World construction and name resolution.
//!
//! The world is built once from location records and is read-only afterwards.
//! That freeze-after-construction rule is what makes it safe to hand `&World`
//! to every player in the session without further coordination.

pub mod location;

use std::collections::BTreeMap;

use thiserror::Error;

pub use location::{Location, LocationId};

/// Inbound description of a single location, as supplied by a data-loading
/// collaborator. Connection targets are plain names so records may reference
/// locations that appear later in the list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationRecord {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub connections: Vec<ConnectionRecord>,
}

/// A directed, named edge in a [`LocationRecord`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionRecord {
    pub direction: String,
    pub target: String,
}

/// Errors surfaced while building a world or resolving a location name.
///
/// Both variants indicate malformed initialization data and are fatal at
/// construction time.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("unknown location: {name}")]
    UnknownLocation { name: String },
    #[error("duplicate location: {name}")]
    DuplicateLocation { name: String },
}

/// Exclusive owner of all [`Location`]s, and the only component allowed to
/// resolve names to locations.
#[derive(Clone, Debug)]
pub struct World {
    locations: Vec<Location>,
    index: BTreeMap<String, LocationId>,
    initial: LocationId,
}

impl World {
    /// Builds a world from location records in two phases: materialize every
    /// location first, then wire connections by resolving target names.
    /// Records may therefore forward-reference locations declared later.
    pub fn build(records: Vec<LocationRecord>, initial: &str) -> Result<Self, WorldError> {
        let mut locations = Vec::with_capacity(records.len());
        let mut index = BTreeMap::new();

        for record in &records {
            let id = LocationId(locations.len() as u32);
            if index.insert(record.name.clone(), id).is_some() {
                return Err(WorldError::DuplicateLocation {
                    name: record.name.clone(),
                });
            }
            locations.push(Location::new(&record.name, &record.description));
        }

        for record in records {
            let id = index[&record.name];
            for connection in record.connections {
                let target =
                    *index
                        .get(&connection.target)
                        .ok_or_else(|| WorldError::UnknownLocation {
                            name: connection.target.clone(),
                        })?;
                locations[id.0 as usize].connect(connection.direction, target);
            }
        }

        let initial = *index
            .get(initial)
            .ok_or_else(|| WorldError::UnknownLocation {
                name: initial.to_string(),
            })?;

        Ok(Self {
            locations,
            index,
            initial,
        })
    }

    /// Resolves a location name. O(1) over the name index; no other component
    /// may maintain a duplicate of it.
    pub fn find(&self, name: &str) -> Result<LocationId, WorldError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| WorldError::UnknownLocation {
                name: name.to_string(),
            })
    }

    /// Looks up a location by handle. Ids are only minted by this world, so
    /// the lookup is infallible for handles it produced.
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.0 as usize]
    }

    pub fn initial_location(&self) -> LocationId {
        self.initial
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Iterates over all locations in creation order.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> + '_ {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, location)| (LocationId(i as u32), location))
    }
}
