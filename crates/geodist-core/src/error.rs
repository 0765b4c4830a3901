//! Error types for the geodesic distance service
//!
//! Coordinate validation failures, unit resolution failures and
//! configuration problems all funnel through [`GeodistError`].

use thiserror::Error;

/// Main error type for geodist operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeodistError {
    // ===== Validation Errors =====
    /// Latitude outside [-90, 90] or not finite
    #[error("Invalid latitude {value}: must be a finite number between -90 and 90 degrees")]
    InvalidLatitude { value: f64 },

    /// Longitude outside [-180, 180] or not finite
    #[error("Invalid longitude {value}: must be a finite number between -180 and 180 degrees")]
    InvalidLongitude { value: f64 },

    // ===== Request Errors =====
    /// Unit selector not in the conversion table
    #[error("Unsupported unit '{0}' (expected one of: km, mi, nm)")]
    UnsupportedUnit(String),

    // ===== Configuration Errors =====
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("Configuration file not readable: {0}")]
    ConfigNotFound(String),

    // ===== General Errors =====
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GeodistError {
    /// Check if this error is a client error (bad input)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GeodistError::InvalidLatitude { .. }
                | GeodistError::InvalidLongitude { .. }
                | GeodistError::UnsupportedUnit(_)
        )
    }

    /// Check if this error came from coordinate range validation
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            GeodistError::InvalidLatitude { .. } | GeodistError::InvalidLongitude { .. }
        )
    }

    /// Get an error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            GeodistError::InvalidLatitude { .. } => "INVALID_LATITUDE",
            GeodistError::InvalidLongitude { .. } => "INVALID_LONGITUDE",
            GeodistError::UnsupportedUnit(_) => "UNSUPPORTED_UNIT",
            GeodistError::InvalidConfig(_) => "INVALID_CONFIG",
            GeodistError::ConfigNotFound(_) => "CONFIG_NOT_FOUND",
            GeodistError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type alias for geodist operations
pub type Result<T> = std::result::Result<T, GeodistError>;

impl From<toml::de::Error> for GeodistError {
    fn from(err: toml::de::Error) -> Self {
        GeodistError::InvalidConfig(err.to_string())
    }
}
