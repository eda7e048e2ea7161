// JSON export of found routes

use crate::error::Result;
use crate::models::Route;
use crate::network::TransportNetwork;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// One visited stop as written to the export file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedStop {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// Stops of `route` in travel order. Locations deleted since the search are skipped
pub fn route_stops(network: &TransportNetwork, route: &Route) -> Vec<ExportedStop> {
    route
        .stops()
        .into_iter()
        .filter_map(|id| network.location(id))
        .map(|location| ExportedStop {
            name: location.name.clone(),
            lat: location.lat,
            lng: location.lon,
        })
        .collect()
}

pub fn route_to_json(network: &TransportNetwork, route: &Route) -> Result<String> {
    Ok(serde_json::to_string_pretty(&route_stops(network, route))?)
}

pub fn write_route_json<P: AsRef<Path>>(
    path: P,
    network: &TransportNetwork,
    route: &Route,
) -> Result<()> {
    fs::write(path, route_to_json(network, route)?)?;
    Ok(())
}
