//! Render harness: load HTML into an isolated page, wait for it to settle,
//! snapshot it, and run the extractor over the snapshot.

mod chrome;
mod error;
mod renderer;
mod snapshot;
mod template;

pub use chrome::ChromeRenderer;
pub use error::RenderError;
pub use renderer::{MAX_VIEWPORT_DIMENSION, RenderOptions, RenderRequest, Renderer};
pub use template::wrap_document;
