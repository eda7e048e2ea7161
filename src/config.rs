// Search configuration

use serde::{Deserialize, Serialize};

/// How the search estimates the remaining cost to the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicMode {
    /// Haversine kilometres converted to edge distance units with the
    /// network's smallest distance-per-kilometre ratio, then scaled by
    /// `distance_weight / max_distance`. Never overestimates, whatever unit
    /// the route distances use
    #[default]
    Commensurate,

    /// Plain haversine kilometres. Not comparable with edge scores, so the
    /// search may stop on a route that is not the cheapest
    RawKilometres,

    /// No estimate; the search degrades to uniform-cost order
    None,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub heuristic: HeuristicMode,
}

impl SearchConfig {
    pub fn new(heuristic: HeuristicMode) -> Self {
        Self { heuristic }
    }
}
