//! Geodist Node - geodesic distance service
//!
//! Serves the `geodesic_distance` operation over HTTP/JSON.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use geodist_core::NodeConfig;
use geodist_node::{logging, AppState};

#[derive(Parser)]
#[command(name = "geodist-node")]
#[command(about = "Geodesic distance service")]
struct Args {
    /// TOML configuration file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Interface to bind (overrides the configuration file)
    #[arg(long)]
    host: Option<String>,

    /// HTTP port (0 = auto-assign, default: 50051)
    #[arg(long, short)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => NodeConfig::load(path)?,
        None => NodeConfig::default(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    // Initialize logging
    logging::init_logging(&config.logging, args.verbose)?;

    info!("Starting geodist node v{}", geodist_core::VERSION);
    if let Some(path) = &args.config {
        info!("Configuration loaded from {}", path.display());
    }

    // Bind to requested port (0 = auto-assign)
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    // Get the actual bound address (important when port was 0)
    let actual_addr = listener.local_addr()?;

    info!("═══════════════════════════════════════════════════════════");
    info!("  Distance service listening on http://{}", actual_addr);
    info!("  RPC: POST http://{}/api/geodesic_distance", actual_addr);
    info!("═══════════════════════════════════════════════════════════");

    let state = Arc::new(AppState::new(config));
    geodist_node::serve(listener, state, shutdown_signal()).await?;

    info!("Distance service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
