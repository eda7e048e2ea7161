// Uniform-cost reference search used to check the A* router's answers

use std::collections::HashMap;

use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::algorithms::weight::score;
use crate::error::{Result, RouteError};
use crate::models::{LocationId, PreferenceVector, Score};
use crate::network::TransportNetwork;

/// Builds a petgraph view of the network with every edge weighted by its score
pub fn scored_graph(
    network: &TransportNetwork,
    preferences: &PreferenceVector,
) -> (DiGraph<LocationId, Score>, HashMap<LocationId, NodeIndex>) {
    let mut graph = DiGraph::new();
    let mut nodes = HashMap::new();

    for location in network.locations().iter() {
        nodes.insert(location.id, graph.add_node(location.id));
    }
    for edge in network.routes().edges() {
        if let (Some(&from), Some(&to)) = (nodes.get(&edge.source), nodes.get(&edge.destination)) {
            graph.add_edge(from, to, score(edge, preferences, network.stats()));
        }
    }

    (graph, nodes)
}

/// Lowest total score from `start` to every reachable location
pub fn uniform_cost_scores(
    network: &TransportNetwork,
    start: LocationId,
    preferences: &PreferenceVector,
) -> Result<HashMap<LocationId, Score>> {
    let (graph, nodes) = scored_graph(network, preferences);
    let &start_node = nodes.get(&start).ok_or(RouteError::UnknownLocation(start))?;

    let scores = dijkstra(&graph, start_node, None, |e| *e.weight());
    Ok(scores
        .into_iter()
        .map(|(node, total)| (graph[node], total))
        .collect())
}

/// Lowest total score from `start` to `goal`, `None` when unreachable
pub fn uniform_cost_score(
    network: &TransportNetwork,
    start: LocationId,
    goal: LocationId,
    preferences: &PreferenceVector,
) -> Result<Option<Score>> {
    if network.location(goal).is_none() {
        return Err(RouteError::UnknownLocation(goal));
    }
    let scores = uniform_cost_scores(network, start, preferences)?;
    Ok(scores.get(&goal).copied())
}
