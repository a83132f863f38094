//! In-page snapshot script.
//!
//! Captures everything the extractor reads about each element in a single
//! `Runtime.evaluate` round trip. The walker still makes every decision; the
//! script only stops at the depth limit and skips blocked subtrees it would
//! never visit anyway, and cuts text to the configured limit so the reply
//! stays proportional to what the walker can keep.

use pagelayer_core::{ExtractConfig, STYLE_PROPERTIES};
use serde_json::json;

const SNAPSHOT_JS: &str = include_str!("snapshot.js");

/// Attributes copied into the snapshot.
const SNAPSHOT_ATTRIBUTES: [&str; 7] = ["id", "class", "src", "alt", "href", "type", "placeholder"];

/// Build the snapshot expression for `config`.
pub(crate) fn snapshot_script(config: &ExtractConfig) -> Result<String, serde_json::Error> {
    let args = json!({
        "maxDepth": config.max_depth,
        "textMax": config.text_max,
        "blockedTags": config.blocked_tags,
        "attributes": SNAPSHOT_ATTRIBUTES,
        "properties": STYLE_PROPERTIES,
    });
    Ok(SNAPSHOT_JS.replace("__SNAPSHOT_ARGS__", &serde_json::to_string(&args)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_embeds_arguments() {
        let config = ExtractConfig {
            max_depth: 6,
            text_max: 120,
            ..Default::default()
        };
        let script = snapshot_script(&config).unwrap();
        assert!(!script.contains("__SNAPSHOT_ARGS__"));
        assert!(script.contains(r#""maxDepth":6"#));
        assert!(script.contains(r#""textMax":120"#));
        assert!(script.contains(r#""noscript""#));
        assert!(script.contains(r#""font-size""#));
        assert!(script.contains(r#""placeholder""#));
    }

    #[test]
    fn test_script_clips_captured_text() {
        let script = snapshot_script(&ExtractConfig::default()).unwrap();
        assert!(script.contains(r#""textMax":2000"#));
        assert!(script.contains("node.directText = clip(direct)"));
        assert!(script.contains("clip(el.innerText)"));
        assert!(!script.contains("? el.innerText :"));
    }

    #[test]
    fn test_script_is_single_expression() {
        let script = snapshot_script(&ExtractConfig::default()).unwrap();
        assert!(script.trim_start().starts_with("(("));
        assert!(script.trim_end().ends_with(')'));
    }
}
