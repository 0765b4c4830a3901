//! Geodist Node - HTTP/JSON front end for the distance service
//!
//! The node exposes [`geodist_core::DistanceService`] over axum:
//! - `POST /api/geodesic_distance` - compute a distance
//! - `GET /api/units` - supported units
//! - `GET /api/info` - service information
//! - `GET /health` - liveness probe
//!
//! [`client::DistanceClient`] is the matching remote caller.

pub mod client;
pub mod logging;
pub mod server;

use std::future::Future;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use geodist_core::{DistanceService, NodeConfig};
use tokio::net::TcpListener;

/// Application state shared across handlers
pub struct AppState {
    /// Distance computation
    pub service: DistanceService,
    /// Effective configuration
    pub config: NodeConfig,
    /// Distance requests served
    pub request_count: AtomicU64,
    /// Node start time
    pub start_time: Instant,
    /// Wall-clock start time reported by `/api/info`
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: NodeConfig) -> Self {
        Self {
            service: DistanceService::new(),
            config,
            request_count: AtomicU64::new(0),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }
}

/// Serve the distance API on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = server::create_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
