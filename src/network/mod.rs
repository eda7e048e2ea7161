// Network module - locations, routes and normalization statistics

mod location_store;
mod route_index;
mod stats;

pub use self::location_store::LocationStore;
pub use self::route_index::RouteIndex;
pub use self::stats::GraphStats;

use crate::algorithms::astar::AStarRouter;
use crate::algorithms::PathFinder;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::models::{
    Cost, Distance, Edge, Location, LocationId, PreferenceVector, Route, Time, TransportMode,
};
use log::debug;

/// A transport network: the location store and the route index kept in sync.
///
/// Single writer; callers sharing a network across threads must serialize access.
#[derive(Debug, Clone, Default)]
pub struct TransportNetwork {
    locations: LocationStore,
    routes: RouteIndex,
    search: SearchConfig,
}

impl TransportNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_config(search: SearchConfig) -> Self {
        Self {
            search,
            ..Self::default()
        }
    }

    pub fn add_location<S: Into<String>>(&mut self, name: S, lat: f64, lon: f64) -> LocationId {
        let id = self.locations.add(name, lat, lon);
        debug!("Added location {}", id);
        id
    }

    pub fn update_location<S: Into<String>>(
        &mut self,
        id: LocationId,
        name: S,
        lat: f64,
        lon: f64,
    ) -> bool {
        if !self.locations.update(id, name, lat, lon) {
            return false;
        }
        self.routes.refresh_distance_ratio(id, &self.locations);
        true
    }

    /// Deletes a location together with every route entering or leaving it
    pub fn delete_location(&mut self, id: LocationId) -> bool {
        if self.locations.remove(id).is_none() {
            return false;
        }
        let removed = self.routes.remove_touching(id);
        debug!("Deleted location {} and {} route(s)", id, removed);
        true
    }

    pub fn add_route(
        &mut self,
        source: LocationId,
        destination: LocationId,
        distance: Distance,
        time: Time,
        cost: Cost,
        mode: TransportMode,
    ) -> Result<()> {
        let edge = Edge::new(source, destination, distance, time, cost, mode);
        self.routes.insert(edge, &self.locations)
    }

    /// Deletes all routes between the ordered pair, parallel modes included
    pub fn delete_route(&mut self, source: LocationId, destination: LocationId) -> bool {
        self.routes.remove_pair(source, destination)
    }

    /// Best route from `start` to `goal` under `preferences`.
    ///
    /// `Ok(None)` when the goal is unreachable; `start == goal` gives an empty route.
    pub fn find_path(
        &self,
        start: LocationId,
        goal: LocationId,
        preferences: &PreferenceVector,
    ) -> Result<Option<Route>> {
        AStarRouter::new(self.search.clone()).find_path(self, start, goal, preferences)
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn locations(&self) -> &LocationStore {
        &self.locations
    }

    pub fn routes(&self) -> &RouteIndex {
        &self.routes
    }

    pub fn stats(&self) -> &GraphStats {
        self.routes.stats()
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    pub fn set_search_config(&mut self, search: SearchConfig) {
        self.search = search;
    }
}
