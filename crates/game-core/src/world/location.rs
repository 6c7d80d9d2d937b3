use std::collections::BTreeMap;

/// Handle into the [`World`](super::World)'s location table.
///
/// Ids are only minted by the `World` that owns the location, so a handle is
/// always valid for the world it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationId(pub u32);

/// A node in the world graph. Owns its outgoing named connections.
///
/// Connections are directed: registering `north` from A to B says nothing
/// about travelling back from B.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    name: String,
    description: String,
    connections: BTreeMap<String, LocationId>,
}

impl Location {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            connections: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Registers or overwrites the connection for `direction` (last write wins).
    pub fn connect(&mut self, direction: impl Into<String>, target: LocationId) {
        self.connections.insert(direction.into(), target);
    }

    /// Returns the connected location, or `None` if `direction` is not a
    /// registered outgoing connection. Absence is expected during legal-action
    /// enumeration and is not an error.
    pub fn connection(&self, direction: &str) -> Option<LocationId> {
        self.connections.get(direction).copied()
    }

    /// Iterates over outgoing connections in direction order.
    pub fn connections(&self) -> impl Iterator<Item = (&str, LocationId)> + '_ {
        self.connections
            .iter()
            .map(|(direction, target)| (direction.as_str(), *target))
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_then_lookup_round_trips() {
        let mut location = Location::new("Start", "Where it all begins");
        location.connect("north", LocationId(1));

        assert_eq!(location.connection("north"), Some(LocationId(1)));
        assert_eq!(location.connection("south"), None);
    }

    #[test]
    fn reconnecting_a_direction_overwrites() {
        let mut location = Location::new("Start", "");
        location.connect("north", LocationId(1));
        location.connect("north", LocationId(2));

        assert_eq!(location.connection("north"), Some(LocationId(2)));
        assert_eq!(location.connection_count(), 1);
    }

    #[test]
    fn connections_iterate_in_direction_order() {
        let mut location = Location::new("Hub", "");
        location.connect("west", LocationId(3));
        location.connect("east", LocationId(1));
        location.connect("north", LocationId(2));

        let directions: Vec<&str> = location
            .connections()
            .map(|(direction, _)| direction)
            .collect();
        assert_eq!(directions, ["east", "north", "west"]);
    }
}
