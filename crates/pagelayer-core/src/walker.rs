//! Bounded recursive descent over live elements.

use tracing::trace;

use crate::config::ExtractConfig;
use crate::element::LiveElement;
use crate::error::ExtractError;
use crate::model::{Bounds, LayoutNode, NodeAttributes};
use crate::pruner::TreePruner;
use crate::sanitizer;
use crate::style::StyleNormalizer;
use crate::visibility;

/// Walks an element tree and produces pruned [`LayoutNode`]s.
pub struct DocumentWalker<'c> {
    config: &'c ExtractConfig,
    pruner: TreePruner<'c>,
}

impl<'c> DocumentWalker<'c> {
    pub fn new(config: &'c ExtractConfig) -> Self {
        Self {
            config,
            pruner: TreePruner::new(config),
        }
    }

    /// Build the node for `element` at `depth`, or `None` when it or its
    /// whole subtree is excluded.
    ///
    /// Any failure reading the element aborts the walk.
    pub fn walk<E: LiveElement>(&self, element: &E, depth: usize) -> Result<Option<LayoutNode>, ExtractError> {
        if depth > self.config.max_depth {
            return Ok(None);
        }

        let tag = element
            .tag()
            .map_err(|source| ExtractError::element("?", depth, source))?
            .to_ascii_lowercase();
        let fail = |source| ExtractError::element(&tag, depth, source);

        if self.config.is_blocked(&tag) {
            trace!("Skipping blocked <{}> at depth {}", tag, depth);
            return Ok(None);
        }

        let rect = element.bounding_rect().map_err(fail)?;
        let computed = element.computed_style().map_err(fail)?;
        if !visibility::is_visible(&rect, &computed, self.config) {
            trace!("Skipping invisible <{}> at depth {}", tag, depth);
            return Ok(None);
        }

        let text = sanitizer::extract_text(element, self.config).map_err(fail)?;
        let style = StyleNormalizer::normalize(&computed);
        let attributes = NodeAttributes::read(element).map_err(fail)?;

        let children = element
            .element_children()
            .map_err(fail)?
            .iter()
            .map(|child| self.walk(child, depth + 1))
            .filter_map(Result::transpose)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.pruner.prune(LayoutNode {
            tag,
            text,
            bounds: Bounds::from_rect(&rect),
            style,
            attributes,
            children,
        }))
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
