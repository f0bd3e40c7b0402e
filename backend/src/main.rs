use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use airport_tracker::config::{AppConfig, StorageKind};
use airport_tracker::storage::{Connection, MemoryConnection};
use airport_tracker::{create_router, initialize_backend, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    info!("Starting airport tracker with {:?} storage", config.storage);

    match config.storage {
        StorageKind::Sqlite => serve(initialize_backend(&config).await?, &config).await,
        StorageKind::Memory => serve(AppState::new(MemoryConnection::new()), &config).await,
    }
}

async fn serve<C: Connection>(app_state: AppState<C>, config: &AppConfig) -> Result<()> {
    let app = create_router(app_state, config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
