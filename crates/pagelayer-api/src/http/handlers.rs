//! Render API handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::{SecondsFormat, Utc};
use pagelayer_browser::RenderRequest;
use pagelayer_core::{ExtractionResult, Viewport};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::ApiError;
use crate::state::AppState;

/// Banner served at `/`.
pub const BANNER: &str = "pagelayer render server running. POST HTML to /api/render";

/// Request body for `POST /api/render`.
#[derive(Debug, Default, Deserialize)]
pub struct RenderBody {
    /// HTML to render.
    pub html: Option<String>,

    #[serde(default)]
    pub options: Option<RenderOptionsBody>,
}

/// Per-request render options.
#[derive(Debug, Default, Deserialize)]
pub struct RenderOptionsBody {
    pub viewport: Option<ViewportBody>,
}

/// Viewport override; omitted dimensions use the server default.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct ViewportBody {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ViewportBody {
    fn resolve(self, default: Viewport) -> Viewport {
        Viewport::new(
            self.width.unwrap_or(default.width),
            self.height.unwrap_or(default.height),
        )
    }
}

/// Successful render response.
#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub success: bool,
    pub data: ExtractionResult,
    /// RFC 3339 time the response was produced.
    pub timestamp: String,
}

impl RenderBody {
    /// Convert into a harness request, rejecting a missing or empty `html`.
    pub fn into_request(self, default_viewport: Viewport) -> Result<RenderRequest, ApiError> {
        let html = self.html.filter(|h| !h.is_empty()).ok_or(ApiError::MissingHtml)?;
        let mut request = RenderRequest::new(html);
        if let Some(viewport) = self.options.and_then(|o| o.viewport) {
            request = request.with_viewport(viewport.resolve(default_viewport));
        }
        Ok(request)
    }
}

/// Render HTML and return its layout tree.
pub async fn render(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RenderBody>, JsonRejection>,
) -> Result<Json<RenderResponse>, ApiError> {
    let Json(body) = body?;
    let request = body.into_request(state.default_viewport)?;

    debug!("Render request: {} bytes of HTML", request.html.len());
    let outcome = state.renderer.render(request).await;
    state.record_render(outcome.is_ok());

    let data = outcome.map_err(|e| {
        error!("Rendering failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(RenderResponse {
        success: true,
        data,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// Plain-text banner.
pub async fn banner() -> &'static str {
    BANNER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_html_rejected() {
        let body = RenderBody::default();
        assert!(matches!(
            body.into_request(Viewport::default()),
            Err(ApiError::MissingHtml)
        ));

        let body: RenderBody = serde_json::from_str(r#"{"html": ""}"#).unwrap();
        assert!(matches!(
            body.into_request(Viewport::default()),
            Err(ApiError::MissingHtml)
        ));
    }

    #[test]
    fn test_partial_viewport_uses_defaults() {
        let body: RenderBody =
            serde_json::from_str(r#"{"html": "<p>x</p>", "options": {"viewport": {"width": 390}}}"#).unwrap();
        let request = body.into_request(Viewport::new(1280, 800)).unwrap();
        assert_eq!(request.viewport, Some(Viewport::new(390, 800)));
    }

    #[test]
    fn test_no_options_leaves_viewport_unset() {
        let body: RenderBody = serde_json::from_str(r#"{"html": "<p>x</p>"}"#).unwrap();
        let request = body.into_request(Viewport::default()).unwrap();
        assert_eq!(request.viewport, None);
        assert_eq!(request.html, "<p>x</p>");
    }
}
