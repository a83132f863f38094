//! Chrome-backed renderer.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use pagelayer_core::{DocumentSnapshot, ExtractionResult, Extractor, Viewport};
use tracing::{debug, warn};

use super::error::RenderError;
use super::renderer::{RenderOptions, RenderRequest, Renderer};
use super::snapshot::snapshot_script;
use super::template::wrap_document;
use crate::cdp::PageSession;
use crate::manager::BrowserManager;

/// Renders each request in a fresh browser context of a shared Chrome.
pub struct ChromeRenderer {
    pipeline: Arc<Pipeline>,
}

/// State shared with the per-request render tasks.
struct Pipeline {
    manager: Arc<BrowserManager>,
    options: RenderOptions,
    extractor: Extractor,
}

impl ChromeRenderer {
    pub fn new(manager: Arc<BrowserManager>, options: RenderOptions) -> Self {
        let extractor = Extractor::new(options.extract.clone());
        Self {
            pipeline: Arc::new(Pipeline {
                manager,
                options,
                extractor,
            }),
        }
    }
}

/// Run `work` on its own task. Dropping the returned future does not cancel
/// `work`, so its cleanup always runs to completion.
async fn run_detached<F, T>(work: F) -> Result<T, RenderError>
where
    F: Future<Output = Result<T, RenderError>> + Send + 'static,
    T: Send + 'static,
{
    match tokio::spawn(work).await {
        Ok(outcome) => outcome,
        Err(e) => Err(RenderError::Resource(format!("Render task failed: {}", e))),
    }
}

impl Pipeline {
    /// Acquire an isolated page, render into it, and release it on every path.
    async fn render_isolated(&self, html: String, viewport: Viewport) -> Result<ExtractionResult, RenderError> {
        let start = Instant::now();

        let page = self.manager.open_isolated_page().await?;
        let outcome = self.render_in(page.session(), &html, viewport).await;

        let context_id = page.context_id().to_string();
        if let Err(e) = self.manager.release(page).await {
            warn!("Failed to release browser context {}: {}", context_id, e);
        }

        match &outcome {
            Ok(result) => debug!(
                "Rendered {} bytes into {} nodes in {:?}",
                html.len(),
                result.node_count(),
                start.elapsed()
            ),
            Err(e) => warn!("Render failed after {:?}: {}", start.elapsed(), e),
        }
        outcome
    }

    /// Load, stabilize, snapshot, extract. The caller owns the page.
    async fn render_in(
        &self,
        session: &PageSession,
        html: &str,
        viewport: Viewport,
    ) -> Result<ExtractionResult, RenderError> {
        session.set_viewport(viewport.width, viewport.height).await?;
        if self.options.disable_javascript {
            session.set_script_execution_disabled(true).await?;
        }

        session
            .set_content(&wrap_document(html, self.options.body_padding_px))
            .await?;

        let timeout = self.options.stabilization_timeout;
        let stabilized = tokio::time::timeout(timeout, async {
            session.wait_for_load(timeout).await?;
            session.wait_for_fonts().await
        })
        .await;
        match stabilized {
            Ok(Ok(())) => {}
            Ok(Err(crate::cdp::CdpError::Timeout(_))) | Err(_) => {
                return Err(RenderError::StabilizationTimeout(timeout.as_millis() as u64));
            }
            Ok(Err(e)) => return Err(e.into()),
        }

        tokio::time::sleep(self.options.settle_delay).await;

        let script = snapshot_script(self.extractor.config()).map_err(|e| RenderError::Snapshot(e.to_string()))?;
        let document: DocumentSnapshot = session.evaluate_as(&script).await?;
        debug!(
            "Snapshot captured: {:?} elements, viewport {}x{}",
            document.total_elements, document.viewport.width, document.viewport.height
        );

        Ok(self.extractor.extract_document(&document)?)
    }
}

#[async_trait]
impl Renderer for ChromeRenderer {
    async fn render(&self, request: RenderRequest) -> Result<ExtractionResult, RenderError> {
        let viewport = request.validate(self.pipeline.options.viewport)?;
        let pipeline = self.pipeline.clone();
        run_detached(async move { pipeline.render_isolated(request.html, viewport).await }).await
    }

    async fn warm_up(&self) -> Result<(), RenderError> {
        self.pipeline.manager.ensure_connected().await?;
        Ok(())
    }

    async fn is_ready(&self) -> bool {
        self.pipeline.manager.is_connected().await
    }

    async fn shutdown(&self) -> Result<(), RenderError> {
        self.pipeline.manager.shutdown_chrome().await?;
        Ok(())
    }
}
