// Directed adjacency index of routes keyed by source location

use crate::error::{Result, RouteError};
use crate::models::{Edge, LocationId};
use crate::network::{GraphStats, LocationStore};
use log::{debug, warn};
use std::collections::BTreeMap;

/// Outgoing edges per source location, plus the normalization maxima.
///
/// Several edges may join the same ordered pair, typically with different modes.
#[derive(Debug, Clone, Default)]
pub struct RouteIndex {
    adjacency: BTreeMap<LocationId, Vec<Edge>>,
    stats: GraphStats,
    // smallest edge distance per great-circle kilometre seen so far; only shrinks
    distance_per_km: Option<f64>,
}

impl RouteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends an edge to its source's list.
    ///
    /// Nothing is modified when validation fails.
    pub fn insert(&mut self, edge: Edge, locations: &LocationStore) -> Result<()> {
        if !locations.contains(edge.source) || !locations.contains(edge.destination) {
            warn!(
                "Rejected route {} -> {}: unknown endpoint",
                edge.source, edge.destination
            );
            return Err(RouteError::InvalidEndpoint {
                source_id: edge.source,
                destination_id: edge.destination,
            });
        }
        if edge.mode.is_wildcard() {
            warn!(
                "Rejected route {} -> {}: wildcard mode",
                edge.source, edge.destination
            );
            return Err(RouteError::InvalidMode);
        }
        for (attribute, value) in [
            ("distance", edge.distance),
            ("time", edge.time),
            ("cost", edge.cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                warn!(
                    "Rejected route {} -> {}: {} = {}",
                    edge.source, edge.destination, attribute, value
                );
                return Err(RouteError::InvalidAttribute { attribute, value });
            }
        }

        debug!(
            "Adding route {} -> {} by {} (distance {}, time {}, cost {})",
            edge.source, edge.destination, edge.mode, edge.distance, edge.time, edge.cost
        );
        self.stats.observe(&edge);
        self.observe_distance_ratio(&edge, locations);
        self.adjacency.entry(edge.source).or_default().push(edge);
        Ok(())
    }

    fn observe_distance_ratio(&mut self, edge: &Edge, locations: &LocationStore) {
        let (Some(from), Some(to)) = (locations.get(edge.source), locations.get(edge.destination))
        else {
            return;
        };
        let km = from.haversine_km(to);
        if km <= 0.0 {
            return;
        }
        let ratio = edge.distance / km;
        self.distance_per_km = Some(match self.distance_per_km {
            Some(current) => current.min(ratio),
            None => ratio,
        });
    }

    /// Re-examines the edges touching a location whose coordinates changed
    pub(crate) fn refresh_distance_ratio(&mut self, id: LocationId, locations: &LocationStore) {
        let touching: Vec<Edge> = self
            .edges()
            .filter(|e| e.source == id || e.destination == id)
            .cloned()
            .collect();
        for edge in &touching {
            self.observe_distance_ratio(edge, locations);
        }
    }

    /// Lower bound on edge distance per great-circle kilometre, `None` until an
    /// edge between distinct points is added. Never grows, so
    /// `ratio * haversine_km(a, b)` never exceeds the distance of any walk from a to b
    pub fn distance_per_km(&self) -> Option<f64> {
        self.distance_per_km
    }

    /// Removes every edge from `source` to `destination`, whatever its mode.
    /// Returns false when no such edge existed
    pub fn remove_pair(&mut self, source: LocationId, destination: LocationId) -> bool {
        let Some(edges) = self.adjacency.get_mut(&source) else {
            return false;
        };
        let before = edges.len();
        edges.retain(|e| e.destination != destination);
        let removed = before - edges.len();
        if edges.is_empty() {
            self.adjacency.remove(&source);
        }
        debug!("Removed {} route(s) {} -> {}", removed, source, destination);
        removed > 0
    }

    /// Removes every edge entering or leaving `id`, returning how many went
    pub fn remove_touching(&mut self, id: LocationId) -> usize {
        let mut removed = self.adjacency.remove(&id).map_or(0, |edges| edges.len());
        for edges in self.adjacency.values_mut() {
            let before = edges.len();
            edges.retain(|e| e.destination != id);
            removed += before - edges.len();
        }
        self.adjacency.retain(|_, edges| !edges.is_empty());
        removed
    }

    /// Outgoing edges of `id`, empty for unknown ids
    pub fn outgoing(&self, id: LocationId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All edges, grouped by source id in ascending order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.values().flatten()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn stats(&self) -> &GraphStats {
        &self.stats
    }
}
