//! Calculator HTTP API.
//!
//! A thin axum layer over the engine and ledger: one route per operation,
//! JSON in and out, permissive CORS so a browser front end can be served
//! from anywhere during development.

pub mod routes;

pub use routes::{ApiState, AppState};

use anyhow::{Context, Result};
use axum::routing::{delete, get, post};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Build the API router with all routes and CORS enabled.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .route("/api/calculate", post(routes::calculate))
        .route("/api/bets", post(routes::record_bet).get(routes::list_bets))
        .route("/api/bets/:id", delete(routes::delete_bet))
        .route("/api/bets/:id/result", post(routes::settle_bet))
        .route("/api/summary", get(routes::get_summary))
        .route("/api/profit-over-time", get(routes::profit_over_time))
        .layer(cors)
        .with_state(state)
}

/// Bind the listener and serve the API until `shutdown` resolves.
/// In-flight requests are allowed to finish before this returns.
pub async fn serve(
    state: AppState,
    port: u16,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let app = build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind API listener on port {port}"))?;
    info!("API listening on http://localhost:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("API server error")?;
    Ok(())
}
