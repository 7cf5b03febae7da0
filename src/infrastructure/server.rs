// Server module - router assembly and the listening loop

use axum::Router;
use sea_orm::DatabaseConnection;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::infrastructure::AppState;
use crate::infrastructure::config::Config;

/// Build the full application router over a database connection
pub fn build_router(db: DatabaseConnection) -> Router {
    let state = AppState::new(db);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind to the configured address and serve until the process is stopped
pub async fn serve(config: &Config, db: DatabaseConnection) -> std::io::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Cinematheque server listening on {}", addr);

    axum::serve(listener, build_router(db)).await
}
