//! Razzie server — HTTP API for Golden Raspberry producer intervals.
//!
//! Loads the awards CSV into memory on startup and serves the interval
//! analysis endpoint.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use razzie_core::MovieStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Razzie: Golden Raspberry Awards producer interval API
#[derive(Parser, Debug)]
#[command(name = "razzie-server", version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Awards CSV file (overrides the configured path)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Host to bind to (overrides the configured host)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides the configured port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)));
    tracing_subscriber::registry().with(stderr_layer).init();

    // Load configuration, then apply CLI overrides
    let mut config = razzie_core::config::load_config(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;
    if let Some(csv) = cli.csv {
        config.data.csv_path = csv;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let store = MovieStore::from_csv_path(&config.data.csv_path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load dataset {}: {}",
            config.data.csv_path.display(),
            e
        )
    })?;
    tracing::info!(
        path = %config.data.csv_path.display(),
        movies = store.len(),
        winners = store.winner_count(),
        "dataset loaded"
    );

    razzie_core::run_server(Arc::new(store), &config.server).await?;
    Ok(())
}
