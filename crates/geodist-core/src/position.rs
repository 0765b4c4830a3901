//! Geographic position types

use serde::{Deserialize, Serialize};

use crate::error::{GeodistError, Result};

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude bound in degrees (inclusive)
pub const MAX_LATITUDE: f64 = 90.0;

/// Longitude bound in degrees (inclusive)
pub const MAX_LONGITUDE: f64 = 180.0;

/// Raw, unvalidated coordinates as received from a caller
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Altitude in meters
    #[serde(default)]
    pub altitude: f64,
}

impl Coordinates {
    /// Create coordinates at sea level
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: 0.0,
        }
    }
}

/// Validated geographic position.
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180];
/// the only way to obtain a `Position` is through a checked constructor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

impl Position {
    /// Create a position at sea level
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Self::with_altitude(latitude, longitude, 0.0)
    }

    /// Create a position with an altitude in meters
    pub fn with_altitude(latitude: f64, longitude: f64, altitude: f64) -> Result<Self> {
        if !latitude.is_finite() || latitude < -MAX_LATITUDE || latitude > MAX_LATITUDE {
            return Err(GeodistError::InvalidLatitude { value: latitude });
        }
        if !longitude.is_finite() || longitude < -MAX_LONGITUDE || longitude > MAX_LONGITUDE {
            return Err(GeodistError::InvalidLongitude { value: longitude });
        }

        Ok(Self {
            latitude,
            longitude,
            altitude,
        })
    }

    /// Latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Altitude in meters
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Great-circle distance to another position in kilometers (Haversine formula).
    ///
    /// Altitude is ignored.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        // rounding can push `a` a hair past 1.0 for antipodal points
        let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

impl TryFrom<Coordinates> for Position {
    type Error = GeodistError;

    fn try_from(coords: Coordinates) -> Result<Self> {
        Position::with_altitude(coords.latitude, coords.longitude, coords.altitude)
    }
}

impl From<Position> for Coordinates {
    fn from(position: Position) -> Self {
        Self {
            latitude: position.latitude,
            longitude: position.longitude,
            altitude: position.altitude,
        }
    }
}
