//! Browser instance manager.
//!
//! Launches (or reuses) a headless Chrome with remote debugging and hands out
//! pages inside throwaway browser contexts.

mod manager_contexts;
mod manager_core;
mod manager_types;

pub use manager_contexts::IsolatedPage;
pub use manager_core::BrowserManager;
pub use manager_types::{BrowserError, BrowserManagerConfig};

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
