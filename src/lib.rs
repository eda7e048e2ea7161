// Public modules
pub mod algorithms;
pub mod config;
pub mod elicitation;
pub mod error;
pub mod models;
pub mod network;
pub mod utils;

// Re-exports for convenience
pub use algorithms::astar::AStarRouter;
pub use algorithms::PathFinder;
pub use config::{HeuristicMode, SearchConfig};
pub use elicitation::{elicit_preferences, AnswerSource, DecisionTree};
pub use error::{Result, RouteError};
pub use models::{Edge, Location, LocationId, PreferenceVector, Route, TransportMode};
pub use network::TransportNetwork;
