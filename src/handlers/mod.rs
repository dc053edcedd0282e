pub mod qr_handler;

use axum::{response::IntoResponse, Json};

/// Liveness probe. Fixed body, no dependency checks.
pub async fn health_check_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
