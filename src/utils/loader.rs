// Network seed loading from JSON

use crate::config::SearchConfig;
use crate::error::Result;
use crate::models::TransportMode;
use crate::network::TransportNetwork;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// A route between locations named by their position in the seed, starting at 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub from: u32,
    pub to: u32,
    pub distance: f64,
    pub time: f64,
    pub cost: f64,
    pub mode: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkSeed {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub locations: Vec<LocationRecord>,
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

impl NetworkSeed {
    /// Builds a fresh network, failing on the first route that is rejected
    pub fn into_network(self) -> Result<TransportNetwork> {
        let mut network = TransportNetwork::with_search_config(self.search);
        for location in self.locations {
            network.add_location(location.name, location.lat, location.lon);
        }
        for route in self.routes {
            let mode: TransportMode = route.mode.parse()?;
            network.add_route(route.from, route.to, route.distance, route.time, route.cost, mode)?;
        }
        info!(
            "Loaded {} locations and {} routes",
            network.locations().len(),
            network.routes().edge_count()
        );
        Ok(network)
    }
}

pub fn load_network<P: AsRef<Path>>(path: P) -> Result<TransportNetwork> {
    let path = path.as_ref();
    info!("Loading network from {}", path.display());
    let json = fs::read_to_string(path)?;
    let seed: NetworkSeed = serde_json::from_str(&json)?;
    seed.into_network()
}

/// Three Indonesian cities with a direct flight and a train/bus alternative
pub fn demo_seed() -> NetworkSeed {
    let location = |name: &str, lat: f64, lon: f64| LocationRecord {
        name: name.to_string(),
        lat,
        lon,
    };
    let route = |from: u32, to: u32, distance: f64, time: f64, cost: f64, mode: &str| RouteRecord {
        from,
        to,
        distance,
        time,
        cost,
        mode: mode.to_string(),
    };

    NetworkSeed {
        search: SearchConfig::default(),
        locations: vec![
            location("Jakarta (JKT)", -6.17, 106.82),
            location("Bandung (BDO)", -6.91, 107.61),
            location("Surabaya (SUB)", -7.25, 112.75),
        ],
        routes: vec![
            route(1, 2, 150.0, 3.0, 150000.0, "train"),
            route(1, 3, 780.0, 1.5, 900000.0, "plane"),
            route(2, 3, 650.0, 10.0, 400000.0, "bus"),
        ],
    }
}
