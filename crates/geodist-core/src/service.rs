//! Stateless geodesic distance service
//!
//! [`DistanceService::geodesic_distance`] validates both endpoints, computes
//! the great-circle distance and converts it into the requested unit.
//! Out-of-range coordinates are reported in-band through
//! [`DistanceResult::invalid`]; only an unsupported unit is an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::position::{Coordinates, Position, EARTH_RADIUS_KM};
use crate::unit::DistanceUnit;

/// Unit label carried by the invalid-input sentinel
pub const INVALID_UNIT_LABEL: &str = "invalid";

/// Distance carried by the invalid-input sentinel
pub const INVALID_DISTANCE: f64 = -1.0;

/// Distance plus the label of the unit it is expressed in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    pub distance: f64,
    pub unit: String,
}

impl DistanceResult {
    /// A valid result in the given unit
    pub fn new(distance: f64, unit: DistanceUnit) -> Self {
        Self {
            distance,
            unit: unit.label().to_string(),
        }
    }

    /// Sentinel returned when either endpoint fails validation
    pub fn invalid() -> Self {
        Self {
            distance: INVALID_DISTANCE,
            unit: INVALID_UNIT_LABEL.to_string(),
        }
    }

    /// Whether this is the invalid-input sentinel
    pub fn is_invalid(&self) -> bool {
        self.unit == INVALID_UNIT_LABEL
    }
}

/// Request handler for great-circle distances.
///
/// Holds no mutable state, so one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceService;

impl DistanceService {
    pub fn new() -> Self {
        Self
    }

    /// Radius of the sphere distances are computed on, in kilometers
    pub fn earth_radius_km(&self) -> f64 {
        EARTH_RADIUS_KM
    }

    /// Great-circle distance between two raw coordinate pairs.
    ///
    /// Returns the invalid sentinel when either endpoint is out of range, and
    /// `GeodistError::UnsupportedUnit` when `unit` is not one of `""`, `"km"`,
    /// `"mi"` or `"nm"`. Coordinates are checked before the unit.
    pub fn geodesic_distance(
        &self,
        source: Coordinates,
        destination: Coordinates,
        unit: &str,
    ) -> Result<DistanceResult> {
        let (source, destination) = match (Position::try_from(source), Position::try_from(destination)) {
            (Ok(source), Ok(destination)) => (source, destination),
            (Err(e), _) | (_, Err(e)) => {
                debug!("Rejected coordinates: {}", e);
                return Ok(DistanceResult::invalid());
            }
        };

        let unit = DistanceUnit::from_selector(unit)?;
        let km = source.distance_to(&destination);
        let distance = unit.from_km(km);

        debug!("Computed distance: {:.6} km -> {:.6} {}", km, distance, unit);

        Ok(DistanceResult::new(distance, unit))
    }

    /// Distance between two already validated positions
    pub fn distance_between(&self, source: &Position, destination: &Position, unit: DistanceUnit) -> DistanceResult {
        DistanceResult::new(unit.from_km(source.distance_to(destination)), unit)
    }
}
