// Location model representing a named point on the globe

use crate::models::LocationId;
use geo::{HaversineDistance, Point};
use serde::{Deserialize, Serialize};

/// A named location identified by a stable id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Identifier assigned by the location store
    pub id: LocationId,

    /// Display name
    pub name: String,

    /// Latitude in degrees
    pub lat: f64,

    /// Longitude in degrees
    pub lon: f64,
}

impl Location {
    /// Creates a new location with the given id, name and coordinates
    pub fn new<S: Into<String>>(id: LocationId, name: S, lat: f64, lon: f64) -> Self {
        Self {
            id,
            name: name.into(),
            lat,
            lon,
        }
    }

    /// Coordinates as a geo point (x = longitude, y = latitude)
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }

    /// Great-circle distance to another location in kilometres
    pub fn haversine_km(&self, other: &Location) -> f64 {
        self.point().haversine_distance(&other.point()) / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_one_degree() {
        let a = Location::new(1, "A", 0.0, 0.0);
        let b = Location::new(2, "B", 0.0, 1.0);

        let km = a.haversine_km(&b);
        assert!((km - 111.19).abs() < 0.1, "got {km}");
    }

    #[test]
    fn test_haversine_same_point() {
        let a = Location::new(1, "Jakarta", -6.17, 106.82);
        assert_eq!(a.haversine_km(&a.clone()), 0.0);
    }
}
