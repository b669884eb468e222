/// Response envelope helpers
///
/// Every API answer is `{ success, data | error, meta }`.
use crate::constants::BANNER_VERSION;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

fn meta(extra: Option<Value>) -> Value {
    let mut meta = json!({
        "timestamp": Utc::now().to_rfc3339(),
        "version": BANNER_VERSION,
    });
    if let (Some(Value::Object(extra)), Some(target)) = (extra, meta.as_object_mut()) {
        target.extend(extra);
    }
    meta
}

pub fn success_response<T: Serialize>(data: T) -> Response {
    success_response_with_meta(data, None)
}

/// Success envelope with additional `meta` fields merged in
pub fn success_response_with_meta<T: Serialize>(data: T, extra_meta: Option<Value>) -> Response {
    Json(json!({
        "success": true,
        "data": data,
        "meta": meta(extra_meta),
    }))
    .into_response()
}

pub fn error_response(
    status: StatusCode,
    code: &str,
    message: &str,
    details: Option<Value>,
) -> Response {
    let mut error = json!({
        "code": code,
        "message": message,
    });
    if let (Some(details), Some(target)) = (details, error.as_object_mut()) {
        target.insert("details".to_string(), details);
    }

    (
        status,
        Json(json!({
            "success": false,
            "error": error,
            "meta": meta(None),
        })),
    )
        .into_response()
}
