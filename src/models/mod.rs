// Models module - exports all model types

mod location;
mod preference;
mod route;

// Re-export model types
pub use self::location::Location;
pub use self::preference::PreferenceVector;
pub use self::route::{Edge, Route, TransportMode};

// Common type aliases for improved code readability
pub type LocationId = u32;
pub type Distance = f64;
pub type Cost = f64;
pub type Time = f64;
pub type Score = f64;
