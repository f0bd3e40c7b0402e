//! # Airport Tracker Backend
//!
//! Keeps a record of visited airports. Every write is validated before it
//! reaches storage.
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients
//!     ↓
//! IO Layer (REST API, mappers)
//!     ↓
//! Domain Layer (validation, AirportService)
//!     ↓
//! Storage Layer (SQLite or in-memory)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{http::Method, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::AirportService;
use crate::storage::{Connection, DbConnection};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState<C: Connection> {
    pub airport_service: AirportService<C>,
}

impl<C: Connection> AppState<C> {
    pub fn new(connection: C) -> Self {
        Self {
            airport_service: AirportService::new(Arc::new(connection)),
        }
    }
}

/// Initialize the backend on the SQLite database named in `config`
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState<DbConnection>> {
    info!("Setting up database at {}", config.database_url);
    let db_conn = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    Ok(AppState::new(db_conn))
}

/// Create the Axum router with all routes configured
pub fn create_router<C: Connection>(app_state: AppState<C>, config: &AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/airports", get(io::list_airports::<C>).post(io::create_airport::<C>))
        .route(
            "/airports/:id",
            get(io::get_airport::<C>)
                .put(io::update_airport::<C>)
                .delete(io::delete_airport::<C>),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
