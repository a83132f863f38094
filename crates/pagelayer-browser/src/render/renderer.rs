//! Renderer abstraction and request types.

use std::time::Duration;

use async_trait::async_trait;
use pagelayer_core::{ExtractConfig, ExtractionResult, Viewport};
use serde::Deserialize;

use super::error::RenderError;

/// Largest accepted viewport width or height.
pub const MAX_VIEWPORT_DIMENSION: u32 = 16_384;

/// One render-and-extract request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderRequest {
    /// HTML fragment or document, placed inside the normalization template.
    pub html: String,

    /// Overrides the configured viewport.
    #[serde(default)]
    pub viewport: Option<Viewport>,
}

impl RenderRequest {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            viewport: None,
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Reject blank HTML and out-of-range viewports; returns the effective
    /// viewport.
    pub fn validate(&self, default_viewport: Viewport) -> Result<Viewport, RenderError> {
        if self.html.trim().is_empty() {
            return Err(RenderError::InvalidInput("html must not be empty".to_string()));
        }

        let viewport = self.viewport.unwrap_or(default_viewport);
        for (name, value) in [("width", viewport.width), ("height", viewport.height)] {
            if value == 0 || value > MAX_VIEWPORT_DIMENSION {
                return Err(RenderError::InvalidInput(format!(
                    "viewport {} must be between 1 and {}, got {}",
                    name, MAX_VIEWPORT_DIMENSION, value
                )));
            }
        }
        Ok(viewport)
    }
}

/// Harness settings shared by every request.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Viewport used when a request does not set one.
    pub viewport: Viewport,
    /// Fixed wait after the document reports complete.
    pub settle_delay: Duration,
    /// Upper bound on waiting for load and fonts.
    pub stabilization_timeout: Duration,
    /// Body padding injected by the template.
    pub body_padding_px: u32,
    /// Block page scripts from running.
    pub disable_javascript: bool,
    pub extract: ExtractConfig,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            settle_delay: Duration::from_millis(2000),
            stabilization_timeout: Duration::from_millis(15000),
            body_padding_px: 20,
            disable_javascript: true,
            extract: ExtractConfig::default(),
        }
    }
}

/// Renders HTML and extracts its layout tree.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Render `request` and return the extraction payload.
    async fn render(&self, request: RenderRequest) -> Result<ExtractionResult, RenderError>;

    /// Acquire backing resources ahead of the first request.
    async fn warm_up(&self) -> Result<(), RenderError> {
        Ok(())
    }

    /// Whether backing resources are available now. Never acquires them.
    async fn is_ready(&self) -> bool {
        true
    }

    /// Release backing resources.
    async fn shutdown(&self) -> Result<(), RenderError> {
        Ok(())
    }
}
