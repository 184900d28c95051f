//! Orchard Daemon
//!
//! Serves the fruit registry over an HTTP API.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use orchard_daemon::config::DaemonConfig;
use orchard_daemon::http::ApiServer;
use orchard_daemon::registry::FruitRegistry;

#[derive(Parser)]
#[command(name = "orchardd")]
#[command(about = "Orchard daemon - fruit registry over HTTP")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// HTTP listen address
    #[arg(short, long)]
    listen: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    info!("Orchard daemon v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration, with CLI overrides
    let config_path = cli.config.unwrap_or_else(orchard_common::default_config_path);
    let mut config = DaemonConfig::load(&config_path)?;
    if let Some(listen) = cli.listen {
        config.listen = listen;
    }

    let addr: SocketAddr = config.listen.parse()?;
    let registry = Arc::new(FruitRegistry::new());
    let server = ApiServer::new(registry);

    info!("Daemon started on {}", config.listen);

    // Wait for shutdown signal
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
        result = server.serve(addr) => {
            if let Err(e) = result {
                tracing::error!("API server error: {}", e);
            }
        }
    }

    info!("Daemon shutdown complete");
    Ok(())
}
