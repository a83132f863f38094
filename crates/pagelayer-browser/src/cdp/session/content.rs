//! Document content operations for CDP page session.

use serde_json::json;
use tracing::debug;

use crate::cdp::error::CdpError;
use crate::cdp::protocol::FrameTree;

use super::core::PageSession;

impl PageSession {
    /// ID of the page's main frame.
    pub async fn main_frame_id(&self) -> Result<String, CdpError> {
        let result = self.call("Page.getFrameTree", None).await?;
        let tree: FrameTree = serde_json::from_value(result["frameTree"].clone())?;
        Ok(tree.frame.id)
    }

    /// Replace the main frame's document with `html`.
    pub async fn set_content(&self, html: &str) -> Result<(), CdpError> {
        let frame_id = self.main_frame_id().await?;
        self.call(
            "Page.setDocumentContent",
            Some(json!({
                "frameId": frame_id,
                "html": html,
            })),
        )
        .await?;

        debug!("Set {} bytes of document content", html.len());
        Ok(())
    }
}
