//! HTTP API built on axum.
//!
//! Exposes the producer interval analysis over REST:
//! `GET /api/producers/prize-intervals` and a `/health` endpoint.

use std::sync::Arc;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use crate::config::ServerConfig;
use crate::intervals::IntervalReport;
use crate::store::MovieStore;

/// Thread-safe shared store reference for axum handlers.
pub type SharedStore = Arc<MovieStore>;

/// Build an axum Router with the producer interval and health routes.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/api/producers/prize-intervals", get(prize_intervals_handler))
        .route("/health", get(health_handler))
        .with_state(store)
}

/// Producers with minimum and maximum intervals between consecutive wins.
async fn prize_intervals_handler(State(store): State<SharedStore>) -> Json<IntervalReport> {
    tracing::debug!("GET /api/producers/prize-intervals");
    let report = store.prize_intervals();
    tracing::debug!(
        min = report.min.len(),
        max = report.max.len(),
        "returning producer intervals"
    );
    Json(report)
}

/// Health check endpoint.
async fn health_handler(State(store): State<SharedStore>) -> impl IntoResponse {
    let body = serde_json::json!({
        "status": "ok",
        "movies": store.len(),
        "winners": store.winner_count(),
    });
    Json(body)
}

/// Start the API server on the configured address.
///
/// This is an async function that runs until cancelled.
pub async fn run(store: SharedStore, config: &ServerConfig) -> Result<(), std::io::Error> {
    let app = router(store);
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "serving producer interval API");
    axum::serve(listener, app).await?;
    Ok(())
}
