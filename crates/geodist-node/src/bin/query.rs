//! Command-line client for a running geodist node

use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use geodist_core::Coordinates;
use geodist_node::client::DistanceClient;

#[derive(Parser)]
#[command(name = "geodist-query")]
#[command(about = "Ask a geodist node for the distance between two positions")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Source latitude in degrees
    source_latitude: f64,
    /// Source longitude in degrees
    source_longitude: f64,
    /// Destination latitude in degrees
    destination_latitude: f64,
    /// Destination longitude in degrees
    destination_longitude: f64,

    /// Unit: km, mi or nm (empty = km)
    #[arg(long, short, default_value = "")]
    unit: String,

    /// Node base URL
    #[arg(long, default_value = "http://127.0.0.1:50051")]
    url: String,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = DistanceClient::new(&args.url)?;
    let source = Coordinates::new(args.source_latitude, args.source_longitude);
    let destination = Coordinates::new(args.destination_latitude, args.destination_longitude);
    debug!("Querying {} for {:?} -> {:?}", args.url, source, destination);

    let result = client
        .geodesic_distance(source, destination, &args.unit)
        .await?;

    if result.is_invalid() {
        eprintln!("Invalid coordinates");
        std::process::exit(2);
    }

    println!("{:.3} {}", result.distance, result.unit);
    Ok(())
}
