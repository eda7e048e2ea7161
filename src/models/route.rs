// Route models: directed edges between locations and search results

use crate::error::RouteError;
use crate::models::{Cost, Distance, LocationId, Score, Time};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Means of transport used on an edge.
///
/// `Any` is only meaningful as a preference; edges always carry a concrete mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Any,
    Walk,
    Bus,
    Car,
    Train,
    Ferry,
    Plane,
}

impl TransportMode {
    /// Every mode an edge may carry
    pub const CONCRETE: [TransportMode; 6] = [
        TransportMode::Walk,
        TransportMode::Bus,
        TransportMode::Car,
        TransportMode::Train,
        TransportMode::Ferry,
        TransportMode::Plane,
    ];

    /// Every mode a preference may name, wildcard included
    pub const ALL: [TransportMode; 7] = [
        TransportMode::Any,
        TransportMode::Walk,
        TransportMode::Bus,
        TransportMode::Car,
        TransportMode::Train,
        TransportMode::Ferry,
        TransportMode::Plane,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Any => "any",
            TransportMode::Walk => "walk",
            TransportMode::Bus => "bus",
            TransportMode::Car => "car",
            TransportMode::Train => "train",
            TransportMode::Ferry => "ferry",
            TransportMode::Plane => "plane",
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, TransportMode::Any)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        TransportMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| RouteError::UnknownMode(s.to_string()))
    }
}

/// A directed, mode-tagged route segment.
///
/// Endpoints are held as ids so location updates never invalidate an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: LocationId,
    pub destination: LocationId,
    pub distance: Distance,
    pub time: Time,
    pub cost: Cost,
    pub mode: TransportMode,
}

impl Edge {
    pub fn new(
        source: LocationId,
        destination: LocationId,
        distance: Distance,
        time: Time,
        cost: Cost,
        mode: TransportMode,
    ) -> Self {
        Self {
            source,
            destination,
            distance,
            time,
            cost,
            mode,
        }
    }
}

/// Outcome of a successful search: a contiguous walk from start to goal.
///
/// A search whose start equals its goal yields a route with no edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Edges in travel order
    pub edges: Vec<Edge>,

    /// Sum of edge scores along the route
    pub score: Score,

    /// Number of frontier entries popped while searching
    pub expanded: usize,
}

impl Route {
    /// True for the start == goal route
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    /// Location ids visited in order, start included
    pub fn stops(&self) -> Vec<LocationId> {
        let mut stops: Vec<LocationId> = self.edges.iter().map(|e| e.source).collect();
        if let Some(last) = self.edges.last() {
            stops.push(last.destination);
        }
        stops
    }

    pub fn total_time(&self) -> Time {
        self.edges.iter().map(|e| e.time).sum()
    }

    pub fn total_cost(&self) -> Cost {
        self.edges.iter().map(|e| e.cost).sum()
    }

    pub fn total_distance(&self) -> Distance {
        self.edges.iter().map(|e| e.distance).sum()
    }
}
