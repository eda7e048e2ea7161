use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering::Relaxed};
use std::sync::Arc;

use log::debug;
use priority_queue::PriorityQueue;

use crate::algorithms::weight::score;
use crate::algorithms::PathFinder;
use crate::config::{HeuristicMode, SearchConfig};
use crate::error::{Result, RouteError};
use crate::models::{Edge, Location, LocationId, PreferenceVector, Route, Score};
use crate::network::{GraphStats, TransportNetwork};

// Custom wrapper to make f64 implement Ord
#[derive(PartialEq, Copy, Clone, Debug)]
struct F64Wrapper(f64);

impl Eq for F64Wrapper {}

impl PartialOrd for F64Wrapper {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for F64Wrapper {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

// Frontier priority: smallest estimate first, ties broken by smallest id
type FrontierKey = Reverse<(F64Wrapper, LocationId)>;

/// A*-style router over a transport network.
///
/// Each call owns its own score tables and frontier.
#[derive(Debug, Clone, Default)]
pub struct AStarRouter {
    config: SearchConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl AStarRouter {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Attaches a flag checked once per frontier pop; raising it aborts the search
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|flag| flag.load(Relaxed))
    }

    /// Estimated remaining score from `from` to `goal`
    fn heuristic(
        &self,
        from: Option<&Location>,
        goal: &Location,
        preferences: &PreferenceVector,
        stats: &GraphStats,
        distance_per_km: Option<f64>,
    ) -> Score {
        let Some(from) = from else {
            return 0.0;
        };
        match self.config.heuristic {
            HeuristicMode::Commensurate => match distance_per_km {
                Some(ratio) => {
                    preferences.distance_weight * from.haversine_km(goal) * ratio
                        / stats.max_distance()
                }
                None => 0.0,
            },
            HeuristicMode::RawKilometres => from.haversine_km(goal),
            HeuristicMode::None => 0.0,
        }
    }
}

impl PathFinder for AStarRouter {
    fn find_path(
        &self,
        network: &TransportNetwork,
        start: LocationId,
        goal: LocationId,
        preferences: &PreferenceVector,
    ) -> Result<Option<Route>> {
        let start_location = network
            .location(start)
            .ok_or(RouteError::UnknownLocation(start))?;
        let goal_location = network
            .location(goal)
            .ok_or(RouteError::UnknownLocation(goal))?;
        let stats = network.stats();
        let distance_per_km = network.routes().distance_per_km();

        let mut g_score: HashMap<LocationId, Score> = HashMap::new();
        let mut came_from: HashMap<LocationId, &Edge> = HashMap::new();
        let mut frontier: PriorityQueue<LocationId, FrontierKey> = PriorityQueue::new();

        g_score.insert(start, 0.0);
        let start_key = self.heuristic(
            Some(start_location),
            goal_location,
            preferences,
            stats,
            distance_per_km,
        );
        frontier.push(start, Reverse((F64Wrapper(start_key), start)));

        let mut expanded = 0;
        while let Some((current, _)) = frontier.pop() {
            if self.cancelled() {
                debug!("Search {} -> {} cancelled after {} pops", start, goal, expanded);
                return Err(RouteError::Cancelled);
            }
            expanded += 1;

            let current_score = g_score[&current];
            if current == goal {
                let edges = reconstruct_path(&came_from, start, goal);
                debug!(
                    "Found route {} -> {} with {} edge(s), score {:.4}, {} pops",
                    start,
                    goal,
                    edges.len(),
                    current_score,
                    expanded
                );
                return Ok(Some(Route {
                    edges,
                    score: current_score,
                    expanded,
                }));
            }

            for edge in network.routes().outgoing(current) {
                let tentative = current_score + score(edge, preferences, stats);
                let improves = match g_score.get(&edge.destination) {
                    Some(&known) => tentative < known,
                    None => true,
                };

                if improves {
                    came_from.insert(edge.destination, edge);
                    g_score.insert(edge.destination, tentative);
                    let estimate = tentative
                        + self.heuristic(
                            network.location(edge.destination),
                            goal_location,
                            preferences,
                            stats,
                            distance_per_km,
                        );
                    frontier.push(
                        edge.destination,
                        Reverse((F64Wrapper(estimate), edge.destination)),
                    );
                }
            }
        }

        debug!("No route {} -> {} after {} pops", start, goal, expanded);
        Ok(None)
    }
}

/// Walks predecessor edges back from the goal and returns them in travel order
fn reconstruct_path(
    came_from: &HashMap<LocationId, &Edge>,
    start: LocationId,
    goal: LocationId,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut at = goal;
    while at != start {
        match came_from.get(&at) {
            Some(edge) => {
                edges.push((*edge).clone());
                at = edge.source;
            }
            None => break,
        }
    }
    edges.reverse();
    edges
}
