//! CDP page session for interacting with a single page.

mod content;
mod core;
mod emulation;
mod js;
mod navigation;

pub use self::core::PageSession;
