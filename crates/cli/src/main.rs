//! Orchard CLI - Main Entry Point
//!
//! Command-line interface for managing fruit records in an orchard daemon.

use clap::{Parser, Subcommand};

use orchard_cli::client::FruitsClient;
use orchard_cli::commands::fruit;
use orchard_cli::output;

/// Orchard CLI - fruit registry management
#[derive(Parser)]
#[command(name = "orchard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Daemon address
    #[arg(long, default_value = "http://127.0.0.1:7070", global = true)]
    daemon_addr: String,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage fruits
    #[command(subcommand)]
    Fruit(fruit::FruitCommands),

    /// Check daemon status
    Status,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    let client = FruitsClient::new(&cli.daemon_addr);

    match cli.command {
        Commands::Fruit(cmd) => fruit::execute(cmd, client, cli.format).await?,
        Commands::Status => {
            if client.health_check().await {
                println!("✅ Daemon is running at {}", cli.daemon_addr);
            } else {
                println!("❌ Daemon is not responding at {}", cli.daemon_addr);
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("Orchard CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Fruit registry over HTTP");
        }
    }

    Ok(())
}
