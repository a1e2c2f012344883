pub mod analysis;
pub mod config;
pub mod db;
pub mod directory;
pub mod error;
pub mod ingest;
pub mod routes;
pub mod stats;

use std::sync::Arc;

use anyhow::Context;
use log::info;

use analysis::Analyzer;
use config::ServerConfig;
use db::{Database, ReadingStore};
use directory::Directory;
use ingest::Ingestor;

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub ingestor: Ingestor,
    pub directory: Directory,
    pub analyzer: Analyzer,
}

impl AppState {
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        let directory = Directory::new(store.clone());
        Self {
            ingestor: Ingestor::new(store.clone()),
            analyzer: Analyzer::new(store, directory.clone()),
            directory,
        }
    }
}

pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Triaxial starting up...");

    let database = Database::new(config.database.clone())?;
    info!("Storing readings in {}", database.path().display());
    let state = AppState::new(Arc::new(database));
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("Listening on http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated with an error")?;

    info!("Triaxial shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
