//! Health Check Handler

use axum::Json;
use serde_json::json;

use crate::utils::AppResponse;

/// GET /health - liveness probe
pub async fn health() -> Json<AppResponse<serde_json::Value>> {
    crate::utils::ok(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
