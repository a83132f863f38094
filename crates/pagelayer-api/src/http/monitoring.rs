//! Monitoring and health check handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    pub uptime_seconds: u64,
    pub renders_total: u64,
    pub renders_failed: u64,
}

/// Health check with render counters.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime().as_secs(),
        renders_total: state.render_count(),
        renders_failed: state.failure_count(),
    })
}

/// Liveness probe (Kubernetes).
pub async fn liveness_probe() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok"
    }))
}

/// Readiness probe (Kubernetes): the renderer is connected to its browser.
///
/// Reports state only; it never launches or connects a browser.
pub async fn readiness_probe(State(state): State<Arc<AppState>>) -> (StatusCode, Json<serde_json::Value>) {
    if state.renderer.is_ready().await {
        (StatusCode::OK, Json(serde_json::json!({"status": "ready"})))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({"status": "unavailable"})),
        )
    }
}
