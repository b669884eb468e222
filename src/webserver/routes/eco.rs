/// Check, banner and cache routes
use crate::errors::EcoError;
use crate::logger::{self, LogTag};
use crate::webserver::{
    models::responses::{CheckResponse, ClearCacheResponse},
    state::AppState,
    utils::{error_response, success_response, success_response_with_meta},
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Flags stay raw strings: only the exact value `true` enables one.
/// An absent flag counts as enabled.
#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    pub url: Option<String>,
    pub use_cache: Option<String>,
    pub include_details: Option<String>,
}

impl CheckQuery {
    pub fn use_cache(&self) -> bool {
        flag_enabled(self.use_cache.as_deref())
    }

    pub fn include_details(&self) -> bool {
        flag_enabled(self.include_details.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct BannerQuery {
    pub url: Option<String>,
    #[serde(default = "default_style")]
    pub style: String,
}

fn flag_enabled(raw: Option<&str>) -> bool {
    raw.map_or(true, |value| value == "true")
}

fn default_style() -> String {
    "default".to_string()
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/check", get(check_handler))
        .route("/banner", get(banner_handler))
        .route("/cache", delete(clear_cache_handler))
}

fn required_url(url: Option<String>) -> Result<String, Response> {
    match url {
        Some(url) if !url.trim().is_empty() => Ok(url),
        _ => Err(error_response(
            StatusCode::BAD_REQUEST,
            "URL_REQUIRED",
            "The \"url\" query parameter is required",
            None,
        )),
    }
}

fn check_error(err: EcoError) -> Response {
    let code = if err.is_aggregation() {
        "CHECK_FAILED"
    } else {
        "INTERNAL_ERROR"
    };
    error_response(StatusCode::INTERNAL_SERVER_ERROR, code, &err.to_string(), None)
}

async fn check_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CheckQuery>,
) -> Result<Response, Response> {
    let use_cache = params.use_cache();
    let include_details = params.include_details();
    let url = required_url(params.url)?;

    let result = state
        .checker
        .check(&url, use_cache)
        .await
        .map_err(check_error)?;

    Ok(success_response_with_meta(
        CheckResponse::new(&result, include_details),
        Some(json!({ "cached": use_cache })),
    ))
}

async fn banner_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BannerQuery>,
) -> Result<Response, Response> {
    let url = required_url(params.url)?;

    let banner = state
        .checker
        .banner_data(&url, &params.style)
        .await
        .map_err(check_error)?;

    Ok(success_response_with_meta(
        banner,
        Some(json!({ "style": params.style })),
    ))
}

async fn clear_cache_handler(State(state): State<Arc<AppState>>) -> Response {
    let cleared = state.checker.clear_cache();
    logger::debug(
        LogTag::Webserver,
        &format!("Cache cleared through API ({} entries)", cleared),
    );

    success_response(ClearCacheResponse {
        message: "Cache cleared".to_string(),
        items_cleared: cleared,
    })
}
