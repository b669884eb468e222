use crate::webserver::{state::AppState, utils::error_response};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Router,
};
use serde_json::json;
use std::sync::Arc;

pub mod eco;
pub mod system;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", axum::routing::get(index))
        .nest("/api/v1", api_routes())
        .fallback(not_found)
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new().merge(eco::routes()).merge(system::routes())
}

/// Service description and endpoint list
async fn index() -> Response {
    Json(json!({
        "name": "ecochecker",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "check": "GET /api/v1/check?url=<url>&use_cache=true&include_details=true",
            "banner": "GET /api/v1/banner?url=<url>&style=default|minimal|detailed",
            "health": "GET /api/v1/health",
            "stats": "GET /api/v1/stats",
            "clearCache": "DELETE /api/v1/cache",
        }
    }))
    .into_response()
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "NOT_FOUND", "Endpoint not found", None)
}
