// Location store assigning sequential ids to locations

use crate::models::{Location, LocationId};
use std::collections::BTreeMap;

/// Owns every location and hands out ids starting at 1
#[derive(Debug, Clone)]
pub struct LocationStore {
    locations: BTreeMap<LocationId, Location>,
    next_id: LocationId,
}

impl LocationStore {
    pub fn new() -> Self {
        Self {
            locations: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Adds a location and returns its id; ids are never reused
    pub fn add<S: Into<String>>(&mut self, name: S, lat: f64, lon: f64) -> LocationId {
        let id = self.next_id;
        self.next_id += 1;
        self.locations.insert(id, Location::new(id, name, lat, lon));
        id
    }

    /// Updates name and coordinates in place. Returns false for an unknown id
    pub fn update<S: Into<String>>(&mut self, id: LocationId, name: S, lat: f64, lon: f64) -> bool {
        match self.locations.get_mut(&id) {
            Some(location) => {
                location.name = name.into();
                location.lat = lat;
                location.lon = lon;
                true
            }
            None => false,
        }
    }

    /// Removes a location. Edge cleanup is the caller's job
    pub fn remove(&mut self, id: LocationId) -> Option<Location> {
        self.locations.remove(&id)
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.locations.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Locations ordered by id
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }
}

impl Default for LocationStore {
    fn default() -> Self {
        Self::new()
    }
}
