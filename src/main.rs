//! Dashboard page server.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────┐
//!                      │              DASHBOARD SERVER              │
//!                      │                                            │
//!   GET /path          │  ┌────────┐   ┌─────────┐   ┌──────────┐  │
//!   ──────────────────▶│  │  http  │──▶│ routing │──▶│  pages   │  │
//!                      │  │ server │   │  table  │   │ (askama) │  │
//!   HTML, 200          │  └────────┘   └─────────┘   └──────────┘  │
//!   ◀──────────────────│       │                                   │
//!                      │       ▼ unmatched path → framework 404    │
//!                      │                                            │
//!                      │  ┌────────────────────────────────────┐   │
//!                      │  │        Cross-Cutting Concerns       │   │
//!                      │  │  config │ observability │ lifecycle │   │
//!                      │  └────────────────────────────────────┘   │
//!                      └───────────────────────────────────────────┘
//! ```
//!
//! The route table is built once at startup and never mutated; every request
//! is an independent, stateless render.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use dashboard_server::config::{load_config, ServerConfig};
use dashboard_server::http::HttpServer;
use dashboard_server::lifecycle::Shutdown;
use dashboard_server::observability;

#[derive(Parser, Debug)]
#[command(name = "dashboard-server", about = "Server-rendered analytics dashboard")]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    let args = Args::parse();

    tracing::info!("dashboard-server v0.1.0 starting");

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.listener.request_timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
