//! HTTP route definitions.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers::{banner, render};
use crate::http::monitoring;
use crate::state::AppState;

/// Create the main router.
///
/// ## Route Structure
///
/// ```text
/// /api
///   POST   /api/render - Render HTML and return its layout tree
///
/// /        - Plain-text banner
/// /health  - Health check with render counters
/// /livez   - Liveness probe (Kubernetes)
/// /readyz  - Readiness probe (Kubernetes)
/// ```
///
/// Every route accepts cross-origin requests from any origin. Bodies larger
/// than `body_limit` bytes are rejected with 413.
pub fn create_router(state: Arc<AppState>, body_limit: usize) -> Router {
    let api_routes = Router::new()
        .route("/render", post(render))
        .with_state(state.clone());

    // Monitoring routes (health, probes)
    let monitoring_routes = Router::new()
        .route("/health", get(monitoring::health_check))
        .route("/readyz", get(monitoring::readiness_probe))
        .with_state(state);

    // Liveness probe has no state dependency
    let liveness_route = Router::new().route("/livez", get(monitoring::liveness_probe));

    Router::new()
        .route("/", get(banner))
        .nest("/api", api_routes)
        .merge(monitoring_routes)
        .merge(liveness_route)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
