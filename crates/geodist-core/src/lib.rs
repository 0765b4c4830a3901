//! Geodist Core - Position validation and great-circle distances
//!
//! This crate holds everything the distance service computes, independent of
//! how requests arrive.
//!
//! # Modules
//!
//! - [`position`] - Validated geographic positions and the Haversine formula
//! - [`unit`] - Supported distance units and their conversion factors
//! - [`service`] - The stateless `geodesic_distance` operation
//! - [`config`] - Node configuration types
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust
//! use geodist_core::{Coordinates, DistanceService};
//!
//! let service = DistanceService::new();
//! let result = service
//!     .geodesic_distance(
//!         Coordinates::new(-33.0351516, -70.5955963),
//!         Coordinates::new(-33.0348327, -71.5980458),
//!         "nm",
//!     )
//!     .unwrap();
//! assert_eq!(result.unit, "nm");
//!
//! // Out-of-range coordinates are reported in-band
//! let invalid = service
//!     .geodesic_distance(Coordinates::new(-95.0, 0.0), Coordinates::new(0.0, 0.0), "km")
//!     .unwrap();
//! assert!(invalid.is_invalid());
//! ```

pub mod position;
pub mod unit;
pub mod service;

// Infrastructure modules
pub mod config;
pub mod error;

// Re-exports for convenience
pub use error::{GeodistError, Result};
pub use position::{Coordinates, Position, EARTH_RADIUS_KM};
pub use unit::DistanceUnit;
pub use service::{DistanceResult, DistanceService};
pub use config::{LogFormat, LogLevel, LoggingConfig, NodeConfig, ServerConfig};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
