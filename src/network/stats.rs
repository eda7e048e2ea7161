// Running maxima used to normalize edge attributes

use crate::models::Edge;

/// Largest time, cost and distance seen on any inserted edge.
///
/// Starts at 1.0 to keep normalization finite. Values only grow: deleting
/// edges or locations does not recompute them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStats {
    max_time: f64,
    max_cost: f64,
    max_distance: f64,
}

impl GraphStats {
    pub fn new() -> Self {
        Self {
            max_time: 1.0,
            max_cost: 1.0,
            max_distance: 1.0,
        }
    }

    pub(crate) fn observe(&mut self, edge: &Edge) {
        self.max_time = self.max_time.max(edge.time);
        self.max_cost = self.max_cost.max(edge.cost);
        self.max_distance = self.max_distance.max(edge.distance);
    }

    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    pub fn max_cost(&self) -> f64 {
        self.max_cost
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }
}

impl Default for GraphStats {
    fn default() -> Self {
        Self::new()
    }
}
