//! API error types.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pagelayer_browser::RenderError;
use serde::Serialize;
use thiserror::Error;

/// Message returned when the request carries no HTML.
pub const MISSING_HTML: &str = "Missing \"html\" in request body";

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body had no usable `html` field.
    #[error("Missing \"html\" in request body")]
    MissingHtml,

    /// The body was not valid JSON for a render request.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// The body exceeded the configured size limit.
    #[error("Request body too large")]
    PayloadTooLarge,

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::MalformedBody(rejection.body_text())
        }
    }
}

/// Error payload.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingHtml | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Render(RenderError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            ApiError::Render(RenderError::StabilizationTimeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Render(RenderError::Resource(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Render(RenderError::Extraction(_) | RenderError::Snapshot(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(&self) -> ErrorBody {
        let (error, message) = match self {
            ApiError::MissingHtml => (MISSING_HTML, None),
            ApiError::MalformedBody(msg) => ("Malformed request body", Some(msg.clone())),
            ApiError::PayloadTooLarge => ("Request body too large", None),
            ApiError::Render(e @ RenderError::InvalidInput(_)) => ("Invalid request", Some(e.to_string())),
            ApiError::Render(e @ RenderError::StabilizationTimeout(_)) => {
                ("Rendering timed out", Some(e.to_string()))
            }
            ApiError::Render(e @ RenderError::Resource(_)) => ("Browser unavailable", Some(e.to_string())),
            ApiError::Render(e) => ("Rendering failed", Some(e.to_string())),
        };
        ErrorBody {
            error: error.to_string(),
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagelayer_core::{ElementError, ExtractError};

    fn body_json(err: &ApiError) -> serde_json::Value {
        serde_json::to_value(err.body()).unwrap()
    }

    #[test]
    fn test_missing_html() {
        let err = ApiError::MissingHtml;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let json = body_json(&err);
        assert_eq!(json["error"], "Missing \"html\" in request body");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (RenderError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (RenderError::StabilizationTimeout(15000), StatusCode::GATEWAY_TIMEOUT),
            (RenderError::Resource("no chrome".into()), StatusCode::SERVICE_UNAVAILABLE),
            (RenderError::Snapshot("TypeError".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                RenderError::Extraction(ExtractError::Element {
                    tag: "div".into(),
                    depth: 1,
                    source: ElementError::Detached("div".into()),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (render_err, status) in cases {
            assert_eq!(ApiError::from(render_err).status(), status);
        }
    }

    #[test]
    fn test_render_failure_body() {
        let err = ApiError::from(RenderError::Snapshot("TypeError: boom".into()));
        let json = body_json(&err);
        assert_eq!(json["error"], "Rendering failed");
        assert_eq!(json["message"], "Snapshot failed: TypeError: boom");
    }
}
