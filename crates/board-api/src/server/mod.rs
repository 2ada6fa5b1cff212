//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use board_common::{AppConfig, AppError};
use board_db::{
    create_pool, SqlitePostRepository, SqliteReactionRepository, SqliteUserRepository,
};
use board_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool and apply migrations
    info!("Connecting to SQLite...");
    let db_config = board_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    board_db::MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("SQLite connection established, schema up to date");

    // Make sure the chart output directory exists
    let chart_path = PathBuf::from(&config.chart.output_path);
    if let Some(parent) = chart_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // Create repositories
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
    let post_repo = Arc::new(SqlitePostRepository::new(pool.clone()));
    let reaction_repo = Arc::new(SqliteReactionRepository::new(pool.clone()));

    let service_context =
        ServiceContext::new(pool, user_repo, post_repo, reaction_repo, chart_path);

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
