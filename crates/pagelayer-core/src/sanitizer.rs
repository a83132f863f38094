//! Visible text extraction and cleanup.

use crate::config::ExtractConfig;
use crate::element::LiveElement;
use crate::error::ElementError;

/// Substrings that mark text as inline script rather than content.
///
/// Best-effort only; this is not a security boundary.
const SCRIPT_MARKERS: [&str; 3] = ["function", "document.", "window."];

/// Text owned by `element`: its direct text nodes, or its rendered text when
/// it has none of its own.
pub fn extract_text<E: LiveElement>(element: &E, config: &ExtractConfig) -> Result<String, ElementError> {
    let direct = element.direct_text()?;
    let direct = direct.trim();
    if !direct.is_empty() {
        return Ok(sanitize(direct, config.text_max));
    }

    let rendered = element.rendered_text()?;
    Ok(sanitize(rendered.trim(), config.text_max))
}

/// Truncate to `max_chars` characters and drop script-like text.
pub fn sanitize(text: &str, max_chars: usize) -> String {
    let truncated = match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    };

    if looks_like_script(truncated) {
        return String::new();
    }
    truncated.to_string()
}

fn looks_like_script(text: &str) -> bool {
    SCRIPT_MARKERS.iter().any(|marker| text.contains(marker))
}
