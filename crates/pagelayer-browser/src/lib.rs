//! Headless Chrome render harness for pagelayer.
//!
//! Drives Chrome over the DevTools Protocol with a small pure Rust client:
//!
//! ```text
//! ┌──────────────────┐    WebSocket     ┌──────────────────┐
//! │  ChromeRenderer  │ ◄──────────────► │  Headless Chrome │
//! │  (this crate)    │       CDP        │  one context per │
//! └──────────────────┘                  │  request         │
//!                                       └──────────────────┘
//! ```
//!
//! Each render wraps the caller's HTML in a normalization template, loads it
//! into a page inside a throwaway browser context, waits for the document to
//! settle, captures a [`pagelayer_core::DocumentSnapshot`] with one script
//! evaluation, and hands the snapshot to the core extractor. The context is
//! disposed on every path.

pub mod cdp;
pub mod manager;
pub mod render;

pub use manager::{BrowserError, BrowserManager, BrowserManagerConfig};
pub use render::{ChromeRenderer, RenderError, RenderOptions, RenderRequest, Renderer};
