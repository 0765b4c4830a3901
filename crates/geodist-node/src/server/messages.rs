//! Request and response bodies

use serde::{Deserialize, Serialize};
use geodist_core::{Coordinates, DistanceUnit};

/// Body of `POST /api/geodesic_distance`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceRequest {
    pub source: Coordinates,
    pub destination: Coordinates,
    /// Unit selector; empty or missing means kilometers
    #[serde(default)]
    pub unit: String,
}

/// Error body returned with a non-2xx status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Entry in the units list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitEntry {
    pub unit: String,
    pub per_km: f64,
}

impl From<DistanceUnit> for UnitEntry {
    fn from(unit: DistanceUnit) -> Self {
        Self {
            unit: unit.label().to_string(),
            per_km: unit.factor(),
        }
    }
}

/// Service information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeInfo {
    pub name: String,
    pub version: String,
    pub earth_radius_km: f64,
    pub request_count: u64,
    pub uptime_seconds: u64,
    /// Start time in milliseconds since the Unix epoch
    pub started_at: i64,
}
