//! REST API endpoints

use axum::{extract::State, Json};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{debug, warn};

use geodist_core::{DistanceResult, DistanceUnit};

use super::error::ApiError;
use super::messages::{DistanceRequest, NodeInfo, UnitEntry};
use crate::AppState;

/// Compute the great-circle distance between two coordinates
pub async fn geodesic_distance(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DistanceRequest>,
) -> Result<Json<DistanceResult>, ApiError> {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    debug!(
        "geodesic_distance {:?} -> {:?} unit={:?}",
        request.source, request.destination, request.unit
    );

    match state
        .service
        .geodesic_distance(request.source, request.destination, &request.unit)
    {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            warn!("Rejected distance request: {}", e);
            Err(e.into())
        }
    }
}

/// List supported units
pub async fn list_units() -> Json<Vec<UnitEntry>> {
    Json(DistanceUnit::ALL.into_iter().map(Into::into).collect())
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Service info endpoint
pub async fn node_info(State(state): State<Arc<AppState>>) -> Json<NodeInfo> {
    Json(NodeInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: geodist_core::VERSION.to_string(),
        earth_radius_km: state.service.earth_radius_km(),
        request_count: state.request_count.load(Ordering::Relaxed),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        started_at: state.started_at.timestamp_millis(),
    })
}
