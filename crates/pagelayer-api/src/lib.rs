//! # Pagelayer API
//!
//! HTTP surface of the render service.
//!
//! ```text
//! POST /api/render  - Render HTML and return its layout tree
//! GET  /            - Plain-text banner
//! GET  /health      - Service health with counters
//! GET  /livez       - Liveness probe
//! GET  /readyz      - Readiness probe (browser reachable)
//! ```
//!
//! Rendering is delegated to any [`pagelayer_browser::Renderer`].

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::handlers::{RenderBody, RenderOptionsBody, RenderResponse, ViewportBody};
pub use http::routes::create_router;
pub use server::{ApiServer, ApiServerConfig};
pub use state::AppState;
