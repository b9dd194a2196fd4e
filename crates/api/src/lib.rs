//! # RoomBooker API
//!
//! The API crate provides the web server for the RoomBooker room-booking
//! service. Clients list rooms and meetings, look up which rooms are free in a
//! time window, book a meeting if its room is free and cancel meetings.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Turn requests into calls on the booking rules
//! - **Middleware**: Error mapping and per-request storage
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework; storage is reached through the
//! `StorageProvider` trait, backed by SQLx and PostgreSQL in production.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error mapping and request-scoped storage
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use roombooker_core::store::StorageProvider;
use roombooker_db::{storage::PgStorageProvider, DbPool};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use roombooker_api::ApiState;
/// # use roombooker_db::storage::PgStorageProvider;
/// # fn example(db_pool: roombooker_db::DbPool) {
/// let state = Arc::new(ApiState::new(Arc::new(PgStorageProvider::new(db_pool))));
/// let app = roombooker_api::app(state);
/// # }
/// ```
pub struct ApiState {
    /// Source of per-request storage connections
    pub storage: Arc<dyn StorageProvider>,
}

impl ApiState {
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self { storage }
    }
}

/// Installs the global `tracing` subscriber at the given level.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the router with every endpoint. Unknown paths redirect to the docs.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // API documentation
        .merge(routes::docs::routes())
        // Meeting endpoints
        .merge(routes::meetings::routes())
        // Room endpoints
        .merge(routes::rooms::routes())
        // Health check endpoints
        .merge(routes::health::routes())
        .fallback(handlers::docs::redirect_to_docs)
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and database pool
///
/// # Example
///
/// ```no_run
/// # async fn example() -> eyre::Result<()> {
/// let config = roombooker_api::config::ApiConfig::from_env()?;
/// let db_pool = roombooker_db::create_pool(&config.database_url, config.max_connections).await?;
/// roombooker_api::start_server(config, db_pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    let state = Arc::new(ApiState::new(Arc::new(PgStorageProvider::new(db_pool))));

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(
                origins
                    .iter()
                    .filter_map(|origin| origin.parse::<HeaderValue>().ok())
                    .collect::<Vec<_>>(),
            );

        app.layer(cors)
    } else {
        app
    };

    // Request logging and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
