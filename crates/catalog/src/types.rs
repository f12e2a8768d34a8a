//! Remote catalog payload types.

use serde::{Deserialize, Serialize};

/// One page of the planets listing, as served by the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetsPage {
    /// Total number of records the service knows about.
    #[serde(default)]
    pub count: Option<u64>,
    /// URL of the next page, if any. This client never follows it.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    /// The records of this page, verbatim.
    pub results: Vec<Planet>,
}

/// A single planet record.
///
/// Every scalar field is a string on the wire (the service serializes its
/// numbers that way); `films` and `residents` are lists of resource URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
    pub residents: Vec<String>,
    pub films: Vec<String>,
    pub created: String,
    pub edited: String,
    pub url: String,
}
