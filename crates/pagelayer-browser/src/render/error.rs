//! Render harness errors.

use pagelayer_core::ExtractError;
use thiserror::Error;

use crate::cdp::CdpError;
use crate::manager::BrowserError;

/// Failure of one render-and-extract invocation.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The request itself is unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The document did not finish loading in time.
    #[error("Document did not stabilize within {0} ms")]
    StabilizationTimeout(u64),

    /// Reading an element failed during the walk.
    #[error(transparent)]
    Extraction(#[from] ExtractError),

    /// The in-page snapshot script failed or returned malformed data.
    #[error("Snapshot failed: {0}")]
    Snapshot(String),

    /// Chrome could not be found, launched, reached, or driven.
    #[error("Browser unavailable: {0}")]
    Resource(String),
}

impl From<BrowserError> for RenderError {
    fn from(e: BrowserError) -> Self {
        RenderError::Resource(e.to_string())
    }
}

impl From<CdpError> for RenderError {
    fn from(e: CdpError) -> Self {
        match e {
            CdpError::JavaScript(msg) => RenderError::Snapshot(msg),
            CdpError::Serialization(err) => RenderError::Snapshot(err.to_string()),
            other => RenderError::Resource(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagelayer_core::ElementError;

    #[test]
    fn test_cdp_javascript_is_snapshot_error() {
        let err = RenderError::from(CdpError::JavaScript("TypeError".into()));
        assert!(matches!(err, RenderError::Snapshot(msg) if msg == "TypeError"));
    }

    #[test]
    fn test_cdp_transport_is_resource_error() {
        let err = RenderError::from(CdpError::SessionClosed);
        assert!(matches!(err, RenderError::Resource(_)));
    }

    #[test]
    fn test_browser_error_is_resource_error() {
        let err = RenderError::from(BrowserError::ChromeNotFound);
        assert!(err.to_string().starts_with("Browser unavailable"));
    }

    #[test]
    fn test_extraction_error_is_transparent() {
        let inner = ExtractError::Element {
            tag: "div".into(),
            depth: 2,
            source: ElementError::Detached("div".into()),
        };
        let display = inner.to_string();
        let err = RenderError::from(inner);
        assert_eq!(err.to_string(), display);
    }

    #[test]
    fn test_timeout_display() {
        assert_eq!(
            RenderError::StabilizationTimeout(15000).to_string(),
            "Document did not stabilize within 15000 ms"
        );
    }
}
