//! Usage data test receiver.
//!
//! # Architecture Overview
//!
//! ```text
//!     Publisher POST            ┌──────────────────────────────────────────┐
//!     ──────────────────────────┼─▶ accept (one connection at a time)       │
//!                               │      │                                   │
//!                               │      ▼                                   │
//!                               │   http1 → Axum router                    │
//!                               │      ├─ POST * → read body → parse JSON  │
//!                               │      │            → receipt dump (stdout)│
//!                               │      │            → JSON acknowledgment  │
//!                               │      └─ GET *  → HTML status page        │
//!     ◀─────────────────────────┼── response, connection closed            │
//!                               └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use usage_receiver::config::{load_receiver_config, validation::validate_receiver_config, ConfigError};
use usage_receiver::lifecycle::{wait_for_interrupt, Shutdown};
use usage_receiver::observability::logging;
use usage_receiver::{HttpServer, ReceiverConfig};

#[derive(Parser)]
#[command(name = "usage-receiver")]
#[command(about = "Logs every JSON payload POSTed to it", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind address (e.g. 127.0.0.1:9000).
    #[arg(short, long)]
    bind: Option<String>,
}

fn print_banner(config: &ReceiverConfig) {
    let port = config
        .port()
        .map(|p| p.to_string())
        .unwrap_or_else(|| config.bind_address.clone());
    let rule = "=".repeat(60);

    println!("🚀 Starting usage data test receiver...");
    println!("📡 Server will listen on port {port}");
    println!("🌐 Access server status at: http://localhost:{port}");
    println!("📊 Data endpoint: {}", config.endpoint_url());
    println!("{rule}");
    println!("💡 To test, point your publisher at:");
    println!("   {}", config.endpoint_url());
    println!("{rule}");
    println!("🔍 Waiting for usage data... (Press Ctrl+C to stop)");
    println!();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init("usage_receiver=info");

    let mut config = match &cli.config {
        Some(path) => load_receiver_config(path)?,
        None => ReceiverConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.bind_address = bind;
    }
    validate_receiver_config(&config).map_err(ConfigError::Validation)?;

    tracing::info!(
        bind_address = %config.bind_address,
        endpoint_path = %config.endpoint_path,
        max_body_bytes = config.max_body_bytes,
        "Configuration loaded"
    );

    let server = HttpServer::new(config);
    print_banner(server.config());

    let listener = match TcpListener::bind(&server.config().bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            println!("❌ Server error: {e}");
            return Err(e.into());
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_interrupt().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    println!("\n🛑 Server stopped by user");
    Ok(())
}
