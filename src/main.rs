use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use shift_tracker::api::{AppState, create_router};
use shift_tracker::config::ConfigLoader;
use shift_tracker::store;
use shift_tracker::tracker::ShiftTracker;

/// Serves the shift tracker HTTP API.
#[derive(Debug, Parser)]
#[command(name = "shift-tracker", version, about)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, default_value = "./config/tracker.yaml")]
    config: PathBuf,

    /// Overrides the configured bind address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();
    let loader = ConfigLoader::load(&cli.config)?;
    let config = loader.config().clone();

    let store = store::connect(&config.storage).await?;
    let state = AppState::new(ShiftTracker::new(store), config.display);

    let bind_address = cli.bind.unwrap_or(config.server.bind_address);
    let listener = TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Shift tracker listening");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
