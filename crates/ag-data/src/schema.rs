//! Dataset schema definitions.

use serde::{Deserialize, Serialize};

/// Current dataset document version.
pub const DATASET_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub airports: Vec<AirportDef>,
    #[serde(default)]
    pub flights: Vec<FlightDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AirportDef {
    pub id: u32,
    pub code: String,
    pub name: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// One recorded leg: an airline flying origin -> destination.
///
/// `count` collapses repeated identical records so a dataset file can say
/// "this airline flew this leg n times" in one row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightDef {
    pub airline: String,
    pub origin: u32,
    pub destination: u32,
    #[serde(default = "default_flight_count")]
    pub count: u32,
}

fn default_flight_count() -> u32 {
    1
}
