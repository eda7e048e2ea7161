// Multi-criteria edge scoring

use crate::models::{Edge, PreferenceVector, Score};
use crate::network::GraphStats;

/// Added to an edge whose mode differs from the preferred one
pub const MODE_PENALTY: Score = 1000.0;

/// Scores an edge under the given preferences.
///
/// Each attribute is divided by its running maximum and the results are
/// blended with the preference weights. An edge that does not use the
/// preferred mode stays traversable but costs `MODE_PENALTY` more.
pub fn score(edge: &Edge, preferences: &PreferenceVector, stats: &GraphStats) -> Score {
    let norm_time = edge.time / stats.max_time();
    let norm_cost = edge.cost / stats.max_cost();
    let norm_distance = edge.distance / stats.max_distance();

    let mut total = norm_time * preferences.time_weight
        + norm_cost * preferences.cost_weight
        + norm_distance * preferences.distance_weight;

    if let Some(mode) = preferences.preferred_mode() {
        if edge.mode != mode {
            total += MODE_PENALTY;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransportMode;
    use crate::network::{LocationStore, RouteIndex};

    fn scenario_stats() -> GraphStats {
        let mut locations = LocationStore::new();
        locations.add("A", 0.0, 0.0);
        locations.add("B", 0.0, 1.0);
        locations.add("C", 0.0, 2.0);
        let mut index = RouteIndex::new();
        for edge in [
            Edge::new(1, 2, 1.0, 10.0, 5.0, TransportMode::Train),
            Edge::new(2, 3, 1.0, 10.0, 5.0, TransportMode::Train),
            Edge::new(1, 3, 3.0, 30.0, 1.0, TransportMode::Plane),
        ] {
            index.insert(edge, &locations).unwrap();
        }
        *index.stats()
    }

    #[test]
    fn test_time_weighted_score() {
        let stats = scenario_stats();
        let prefs = PreferenceVector::new("fastest", 1.0, 0.0, 0.0);

        let direct = Edge::new(1, 3, 3.0, 30.0, 1.0, TransportMode::Plane);
        let hop = Edge::new(1, 2, 1.0, 10.0, 5.0, TransportMode::Train);

        assert!((score(&direct, &prefs, &stats) - 1.0).abs() < 1e-9);
        assert!((score(&hop, &prefs, &stats) - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_cost_weighted_score() {
        let stats = scenario_stats();
        let prefs = PreferenceVector::new("cheapest", 0.0, 1.0, 0.0);

        let direct = Edge::new(1, 3, 3.0, 30.0, 1.0, TransportMode::Plane);
        let hop = Edge::new(1, 2, 1.0, 10.0, 5.0, TransportMode::Train);

        assert!((score(&direct, &prefs, &stats) - 0.2).abs() < 1e-9);
        assert!((score(&hop, &prefs, &stats) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_mode_penalty() {
        let stats = scenario_stats();
        let prefs = PreferenceVector::new("balanced", 0.4, 0.3, 0.3).with_mode(TransportMode::Train);

        let by_train = Edge::new(1, 2, 2.0, 20.0, 3.0, TransportMode::Train);
        let by_bus = Edge {
            mode: TransportMode::Bus,
            ..by_train.clone()
        };

        let difference = score(&by_bus, &prefs, &stats) - score(&by_train, &prefs, &stats);
        assert!(difference >= MODE_PENALTY - 1e-9);
    }

    #[test]
    fn test_wildcard_preference_has_no_penalty() {
        let stats = scenario_stats();
        let prefs = PreferenceVector::new("fastest", 1.0, 0.0, 0.0);
        let edge = Edge::new(1, 2, 1.0, 10.0, 5.0, TransportMode::Ferry);

        assert!(score(&edge, &prefs, &stats) < 1.0);
    }
}
