pub mod astar;
pub mod reference;
pub mod weight;

// Common algorithm traits
use crate::error::Result;
use crate::models::{LocationId, PreferenceVector, Route};
use crate::network::TransportNetwork;

/// Trait for route search strategies over a transport network
pub trait PathFinder {
    /// Find the best route from `start` to `goal`.
    ///
    /// Returns `Ok(None)` when the goal cannot be reached and
    /// `Err(RouteError::UnknownLocation)` when either id is not in the network.
    fn find_path(
        &self,
        network: &TransportNetwork,
        start: LocationId,
        goal: LocationId,
        preferences: &PreferenceVector,
    ) -> Result<Option<Route>>;
}
