//! Product API server.
//!
//! A single-resource HTTP/JSON service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 PRODUCT API                   │
//!                    │                                               │
//!   Client Request   │  ┌──────────┐   ┌──────────┐   ┌──────────┐  │
//!   ─────────────────┼─▶│  access  │──▶│   auth   │──▶│ products │  │
//!                    │  │  logger  │   │   gate   │   │ handlers │  │
//!                    │  └──────────┘   └──────────┘   └────┬─────┘  │
//!                    │                                     │        │
//!                    │                 writes only         ▼        │
//!                    │               ┌──────────┐   ┌──────────┐   │
//!                    │               │validation│──▶│  store   │   │
//!                    │               │   gate   │   │ (trait)  │   │
//!                    │               └──────────┘   └──────────┘   │
//!                    │                                     │        │
//!   Client Response  │  ┌───────────────────────┐          │        │
//!   ◀────────────────┼──│   error translator    │◀─────────┘        │
//!                    │  │ (ApiError → status +  │   any failure     │
//!                    │  │     JSON body)        │                   │
//!                    │  └───────────────────────┘                   │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use product_api::config::loader::{default_config, load_config};
use product_api::http::HttpServer;
use product_api::store::{seed, MemoryStore, ProductStore};

#[derive(Parser)]
#[command(name = "product-api")]
#[command(about = "HTTP/JSON product catalog service", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("product-api v{} starting", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    // Load configuration; a missing config file means defaults + env
    let mut config = if cli.config.exists() {
        load_config(&cli.config)?
    } else {
        tracing::warn!(path = %cli.config.display(), "Config file not found, using defaults");
        default_config()?
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        allow_anonymous_list = config.auth.allow_anonymous_list,
        "Configuration loaded"
    );

    // Construct the store and run the one-time seed pass
    let store: Arc<dyn ProductStore> = Arc::new(MemoryStore::new());
    if config.seed.enabled {
        seed::seed_if_empty(store.as_ref()).await?;
    }

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config, store);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
