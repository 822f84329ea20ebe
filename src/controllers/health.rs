use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness never degrades: the record store is in-process memory and the
/// synthesis provider is only reachable with a caller-supplied credential
pub async fn health_ready() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "store": "in-memory",
            "provider": "elevenlabs"
        })),
    )
}
