//! Chrome DevTools Protocol (CDP) client.
//!
//! Connects to Chrome over the browser-level WebSocket and multiplexes
//! flattened target sessions on it.
//!
//! ```rust,ignore
//! let client = CdpClient::connect("http://localhost:9222").await?;
//! let context = client.create_browser_context().await?;
//! let page = client.new_page_in_context(&context).await?;
//! page.set_content("<p>Hello</p>").await?;
//! ```

mod client;
mod error;
mod protocol;
mod session;

pub use client::CdpClient;
pub use error::CdpError;
pub use protocol::*;
pub use session::PageSession;
