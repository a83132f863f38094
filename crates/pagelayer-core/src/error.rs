//! Extraction error types.

use thiserror::Error;

/// Failure while reading state from a live element.
#[derive(Debug, Error)]
pub enum ElementError {
    /// The element is no longer attached to the document.
    #[error("Element detached: {0}")]
    Detached(String),

    /// A property could not be read from the host.
    #[error("Failed to read {property}: {reason}")]
    Unreadable { property: String, reason: String },
}

impl ElementError {
    /// Shorthand for [`ElementError::Unreadable`].
    pub fn unreadable(property: impl Into<String>, reason: impl Into<String>) -> Self {
        ElementError::Unreadable {
            property: property.into(),
            reason: reason.into(),
        }
    }
}

/// Failure of a whole extraction. No partial tree accompanies it.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Reading an element failed mid-walk.
    #[error("Extraction failed at <{tag}> (depth {depth}): {source}")]
    Element {
        tag: String,
        depth: usize,
        #[source]
        source: ElementError,
    },
}

impl ExtractError {
    pub(crate) fn element(tag: &str, depth: usize, source: ElementError) -> Self {
        ExtractError::Element {
            tag: tag.to_string(),
            depth,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unreadable_display() {
        let err = ElementError::unreadable("getBoundingClientRect", "node gone");
        assert_eq!(
            err.to_string(),
            "Failed to read getBoundingClientRect: node gone"
        );
    }

    #[test]
    fn test_extract_error_keeps_source() {
        let err = ExtractError::element("div", 3, ElementError::Detached("div#main".into()));
        let display = err.to_string();
        assert!(display.contains("<div>"));
        assert!(display.contains("depth 3"));
        assert!(err.source().is_some());
    }
}
