//! BrowserManager isolated page management.

use tracing::{debug, warn};

use super::{BrowserError, BrowserManager};
use crate::cdp::PageSession;

/// A page living in its own browser context.
///
/// Must be handed back to [`BrowserManager::release`] when done.
pub struct IsolatedPage {
    context_id: String,
    session: PageSession,
}

impl IsolatedPage {
    pub fn session(&self) -> &PageSession {
        &self.session
    }

    pub fn context_id(&self) -> &str {
        &self.context_id
    }
}

impl BrowserManager {
    /// Open a blank page in a fresh browser context.
    pub async fn open_isolated_page(&self) -> Result<IsolatedPage, BrowserError> {
        self.ensure_connected().await?;
        let client = self.client().await?;

        let context_id = client
            .create_browser_context()
            .await
            .map_err(|e| BrowserError::ContextFailed(e.to_string()))?;

        match client.new_page_in_context(&context_id).await {
            Ok(session) => {
                debug!("Opened page {} in context {}", session.target_id(), context_id);
                Ok(IsolatedPage { context_id, session })
            }
            Err(e) => {
                if let Err(dispose) = client.dispose_browser_context(&context_id).await {
                    warn!("Failed to dispose context {}: {}", context_id, dispose);
                }
                Err(e.into())
            }
        }
    }

    /// Dispose the page's browser context.
    pub async fn release(&self, page: IsolatedPage) -> Result<(), BrowserError> {
        let client = self.client().await?;
        client.release_session(&page.session).await;
        client.dispose_browser_context(&page.context_id).await?;
        debug!("Disposed context {}", page.context_id);
        Ok(())
    }
}
