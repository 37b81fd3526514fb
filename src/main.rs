//! container-hello: a minimal container entry point.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file, initializes tracing, resolves the container id, sets up the Axum
//! router and serves until the process is terminated.

use clap::Parser;

use container_hello::config::{AppConfig, DEFAULT_CONFIG_PATH};
use container_hello::container::ContainerId;
use container_hello::routes::create_router;
use container_hello::state::AppState;
use container_hello::{http, telemetry};

/// container-hello: greets with its container id and answers health checks
#[derive(Parser, Debug)]
#[command(name = "container-hello", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "container_hello=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> container_hello::Result<()> {
    let args = Args::parse();

    // Configuration decides the log format, so it is loaded first
    let config = AppConfig::load(&args.config)?;

    let log_filter = telemetry::resolve_filter(args.log_level, std::env::var("RUST_LOG").ok());
    telemetry::init(&log_filter, config.logging.log_format()?);

    tracing::info!(
        path = %args.config,
        version = %config.app.version,
        "Loaded configuration"
    );

    let container_id = ContainerId::resolve();
    tracing::info!(container_id = %container_id, "Resolved container id");

    let addr = config.socket_addr()?;
    let state = AppState::new(container_id, &config.app.version);
    let app = create_router(state);

    if let Err(e) = http::start_server(app, addr).await {
        tracing::error!(error = %e, "HTTP server failed");
        return Err(e.into());
    }

    Ok(())
}
