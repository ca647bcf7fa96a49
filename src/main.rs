//! Todo HTTP Server
//!
//! A small CRUD server over a single `todos` entity, built with Tokio and
//! Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 TODO SERVER                   │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!   ─────────────────┼─▶│  http   │───▶│ routing  │───▶│handlers │  │
//!                    │  │ server  │    │  table   │    └────┬────┘  │
//!                    │  └─────────┘    └──────────┘         │       │
//!                    │                                      ▼       │
//!                    │                               ┌──────────┐   │
//!   Client Response  │                               │  store   │   │
//!   ◀────────────────┼───────────────────────────────│ mem / db │   │
//!                    │                               └──────────┘   │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │         Cross-Cutting Concerns           │ │
//!                    │  │  ┌────────┐ ┌─────────────────────────┐ │ │
//!                    │  │  │ config │ │      observability      │ │ │
//!                    │  │  └────────┘ └─────────────────────────┘ │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use todo_server::config::loader::load_config;
use todo_server::config::{ServerConfig, StoreBackend};
use todo_server::http::HttpServer;
use todo_server::observability::{logging, metrics};
use todo_server::store::{MemoryTodoStore, SqliteTodoStore, TodoStore};

#[derive(Debug, Parser)]
#[command(name = "todo-server", about = "CRUD server for todos")]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let args = Args::parse();
    let config = match args.config {
        Some(path) => load_config(&path)?,
        None => ServerConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = ?config.store.backend,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let store: Arc<dyn TodoStore> = match config.store.backend {
        StoreBackend::Memory => Arc::new(MemoryTodoStore::new()),
        StoreBackend::Sqlite => Arc::new(SqliteTodoStore::open(&config.store.path)?),
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let server = HttpServer::new(&config, store);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
