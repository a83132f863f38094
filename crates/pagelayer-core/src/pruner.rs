//! Post-order retention decision.

use tracing::trace;

use crate::config::ExtractConfig;
use crate::model::LayoutNode;

/// Decides whether a candidate, with its already-pruned children, survives.
pub struct TreePruner<'c> {
    config: &'c ExtractConfig,
}

impl<'c> TreePruner<'c> {
    pub fn new(config: &'c ExtractConfig) -> Self {
        Self { config }
    }

    /// Keep a node with text, with surviving children, or with a signal tag.
    pub fn prune(&self, candidate: LayoutNode) -> Option<LayoutNode> {
        if !candidate.text.is_empty()
            || !candidate.children.is_empty()
            || self.config.is_signal(&candidate.tag)
        {
            return Some(candidate);
        }

        trace!("Pruned empty <{}>", candidate.tag);
        None
    }
}
