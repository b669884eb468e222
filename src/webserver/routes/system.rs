/// Health and statistics routes
use crate::health;
use crate::webserver::{
    models::responses::{CacheMetricsResponse, HealthResponse, StatsResponse},
    state::AppState,
    utils::{error_response, success_response},
};
use axum::{extract::State, http::StatusCode, response::Response, routing::get, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Response {
    match health::probe(&state.providers).await {
        Ok(report) => success_response(HealthResponse {
            report,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.uptime_seconds(),
        }),
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "HEALTH_PROBE_FAILED",
            &e.to_string(),
            None,
        ),
    }
}

async fn stats_handler(State(state): State<Arc<AppState>>) -> Response {
    let metrics = state.checker.cache_metrics();
    success_response(StatsResponse {
        cache: state.checker.cache_stats(),
        metrics: CacheMetricsResponse {
            hit_rate: metrics.hit_rate(),
            counters: metrics,
        },
        uptime_seconds: state.uptime_seconds(),
        timestamp: chrono::Utc::now(),
    })
}
