//! Load-state waiting for CDP page session.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::cdp::error::CdpError;

use super::core::PageSession;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

impl PageSession {
    /// Wait until `document.readyState` is `complete`.
    pub async fn wait_for_load(&self, timeout: Duration) -> Result<(), CdpError> {
        let start = Instant::now();

        loop {
            let result = self.evaluate("document.readyState").await?;

            if result.as_str() == Some("complete") {
                debug!("Document complete after {:?}", start.elapsed());
                return Ok(());
            }

            if start.elapsed() > timeout {
                return Err(CdpError::Timeout("Page load timeout".to_string()));
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Wait until web fonts have loaded or failed.
    pub async fn wait_for_fonts(&self) -> Result<(), CdpError> {
        self.evaluate("document.fonts ? document.fonts.ready.then(() => true) : true")
            .await?;
        Ok(())
    }
}
