//! Distance units and the kilometer conversion table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GeodistError;

/// Statute miles per kilometer
pub const MILES_PER_KM: f64 = 0.621371;

/// Nautical miles per kilometer (1 nm = 1.852 km)
pub const NAUTICAL_MILES_PER_KM: f64 = 0.539957;

/// Unit a distance can be reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    /// Kilometers, also selected by an empty selector
    #[default]
    #[serde(rename = "km")]
    Kilometers,
    /// Statute miles
    #[serde(rename = "mi")]
    Miles,
    /// Nautical miles
    #[serde(rename = "nm")]
    NauticalMiles,
}

impl DistanceUnit {
    /// Every supported unit
    pub const ALL: [DistanceUnit; 3] = [
        DistanceUnit::Kilometers,
        DistanceUnit::Miles,
        DistanceUnit::NauticalMiles,
    ];

    /// Resolve a unit selector. An empty selector means kilometers.
    pub fn from_selector(selector: &str) -> Result<Self, GeodistError> {
        match selector {
            "" | "km" => Ok(DistanceUnit::Kilometers),
            "mi" => Ok(DistanceUnit::Miles),
            "nm" => Ok(DistanceUnit::NauticalMiles),
            other => Err(GeodistError::UnsupportedUnit(other.to_string())),
        }
    }

    /// Short label echoed back in responses
    pub fn label(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nm",
        }
    }

    /// Multiplier applied to a distance in kilometers
    pub fn factor(&self) -> f64 {
        match self {
            DistanceUnit::Kilometers => 1.0,
            DistanceUnit::Miles => MILES_PER_KM,
            DistanceUnit::NauticalMiles => NAUTICAL_MILES_PER_KM,
        }
    }

    /// Convert a distance in kilometers into this unit
    pub fn from_km(&self, km: f64) -> f64 {
        km * self.factor()
    }
}

impl FromStr for DistanceUnit {
    type Err = GeodistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistanceUnit::from_selector(s)
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
