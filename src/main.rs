//! Launcher binary for the face-liveness backend.
//!
//! Linear startup sequence, fail fast on any error:
//! resolve config (file, then `PORT` override) → init logging → bind
//! listener → serve the application until SIGINT/SIGTERM.

use std::path::PathBuf;

use clap::Parser;

use liveness_backend::config::{env::apply_overrides, loader::load_config, ServerConfig};
use liveness_backend::lifecycle::{signals, Shutdown};
use liveness_backend::observability::{logging, metrics};
use liveness_backend::{app, net, HttpServer};

#[derive(Parser)]
#[command(name = "liveness-backend")]
#[command(about = "Face liveness API server", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// One human-readable line announcing the resolved port.
fn startup_banner(port: u16) -> String {
    format!("Starting face liveness API on port {}", port)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    apply_overrides(&mut config)?;

    logging::init_logging(&config.observability.log_level);

    let port = config.listener.port;
    tracing::info!("{}", startup_banner(port));

    tracing::info!(
        host = %config.listener.host,
        port = port,
        log_level = %config.observability.log_level,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration resolved"
    );

    let listener = net::bind_listener(&config.listener).await?;

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(config, app::main::app());
    server.run(listener, shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
