//! Extraction tuning knobs.

use serde::{Deserialize, Serialize};

/// Configuration consumed by the extractor.
///
/// Depth and size threshold differ between historical deployments (6 vs 8
/// levels, 1px vs 2px); both are exposed here with the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Deepest recursion level that still produces nodes. `body` is level 0.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Elements whose rounded width or height is below this are invisible.
    #[serde(default = "default_min_visible_size")]
    pub min_visible_size: f64,

    /// Maximum number of characters kept in a node's text.
    #[serde(default = "default_text_max")]
    pub text_max: usize,

    /// Tags that are dropped with their whole subtree.
    #[serde(default = "default_blocked_tags")]
    pub blocked_tags: Vec<String>,

    /// Tags kept even without text or children.
    #[serde(default = "default_signal_tags")]
    pub signal_tags: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            min_visible_size: default_min_visible_size(),
            text_max: default_text_max(),
            blocked_tags: default_blocked_tags(),
            signal_tags: default_signal_tags(),
        }
    }
}

impl ExtractConfig {
    pub fn is_blocked(&self, tag: &str) -> bool {
        self.blocked_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn is_signal(&self, tag: &str) -> bool {
        self.signal_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

fn default_max_depth() -> usize {
    8
}

fn default_min_visible_size() -> f64 {
    2.0
}

fn default_text_max() -> usize {
    2000
}

fn default_blocked_tags() -> Vec<String> {
    ["script", "noscript", "meta", "link", "style"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_signal_tags() -> Vec<String> {
    ["img", "button", "input", "a"]
        .into_iter()
        .map(String::from)
        .collect()
}
