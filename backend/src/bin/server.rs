//! FundSpark HTTP Server Binary
//!
//! Main entry point for the FundSpark REST API server. It loads
//! configuration, creates the in-memory repository, sets up the HTTP router
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin fundspark-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8000)
//! - `ALLOWED_ORIGINS`: Comma-separated CORS origins
//!   (default: http://localhost:3000,http://localhost:5173)
//! - `FUNDSPARK_CONFIG`: Path to a TOML config file (default: ./fundspark.toml if present)
//! - `RUST_LOG`: Log filter (default: info)
//!
//! A `.env` file in the working directory is loaded first.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fundspark::config::{self, ServerConfig};
use fundspark::db::{FullRepository, LocalRepository};
use fundspark::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before logging so RUST_LOG from .env is honored.
    let dotenv_path = config::load_dotenv()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting FundSpark HTTP Server");
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    let config = ServerConfig::load()?;
    info!(origins = ?config.allowed_origins, "CORS origins configured");

    let repository: Arc<dyn FullRepository> = Arc::new(LocalRepository::new());
    info!("In-memory repository initialized");

    let state = AppState::new(repository);
    let app = create_router(state, &config.allowed_origins);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
