//! Extraction entry point and result assembly.

use tracing::debug;

use crate::config::ExtractConfig;
use crate::element::LiveElement;
use crate::error::ExtractError;
use crate::model::{ExtractionResult, LayoutNode, Viewport};
use crate::snapshot::DocumentSnapshot;
use crate::walker::DocumentWalker;

/// Runs the walk from `body` and assembles the payload.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Walk `body` at depth 0 and wrap the result with viewport metadata.
    pub fn extract<E: LiveElement>(
        &self,
        body: Option<&E>,
        viewport: Viewport,
        total_elements: Option<u64>,
    ) -> Result<ExtractionResult, ExtractError> {
        let root = match body {
            Some(body) => DocumentWalker::new(&self.config).walk(body, 0)?,
            None => None,
        };

        let result = assemble(root, viewport, total_elements);
        debug!(
            "Extracted {} nodes (document has {:?} elements, viewport {}x{})",
            result.node_count(),
            result.total_elements,
            viewport.width,
            viewport.height
        );
        Ok(result)
    }

    /// Extract from a host-captured snapshot.
    pub fn extract_document(&self, document: &DocumentSnapshot) -> Result<ExtractionResult, ExtractError> {
        let body = document.body.as_ref();
        self.extract(body.as_ref(), document.viewport, document.total_elements)
    }
}

/// Wrap the walker's result for `body` into the output payload.
pub fn assemble(root: Option<LayoutNode>, viewport: Viewport, total_elements: Option<u64>) -> ExtractionResult {
    ExtractionResult {
        elements: root,
        viewport,
        total_elements,
    }
}
