//! Browser manager type definitions and configuration.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::cdp::CdpError;

/// Browser manager errors.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Browser not connected")]
    NotConnected,

    #[error("Chrome not found. Please install Google Chrome or set browser.chrome_path.")]
    ChromeNotFound,

    #[error("Failed to launch Chrome: {0}")]
    LaunchFailed(String),

    #[error("Browser context failed: {0}")]
    ContextFailed(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Action failed: {0}")]
    ActionFailed(String),
}

impl From<CdpError> for BrowserError {
    fn from(e: CdpError) -> Self {
        match e {
            CdpError::ConnectionFailed(msg) => BrowserError::ConnectionFailed(msg),
            CdpError::ChromeNotAvailable(msg) => BrowserError::ConnectionFailed(msg),
            CdpError::WebSocket(msg) => BrowserError::ConnectionFailed(msg),
            CdpError::Timeout(msg) => BrowserError::Timeout(msg),
            CdpError::SessionClosed => BrowserError::NotConnected,
            _ => BrowserError::ActionFailed(e.to_string()),
        }
    }
}

/// Browser configuration.
#[derive(Debug, Clone)]
pub struct BrowserManagerConfig {
    /// Chrome debugging port.
    pub debug_port: u16,
    /// Whether to run Chrome in headless mode.
    pub headless: bool,
    /// Explicit Chrome executable.
    pub chrome_path: Option<PathBuf>,
    /// User data directory.
    pub profile_dir: Option<PathBuf>,
    /// How long to wait for the debugging endpoint after launch.
    pub launch_timeout: Duration,
    /// Additional command line switches.
    pub extra_args: Vec<String>,
}

impl Default for BrowserManagerConfig {
    fn default() -> Self {
        Self {
            debug_port: 9222,
            headless: true,
            chrome_path: None,
            profile_dir: None,
            launch_timeout: Duration::from_millis(6000),
            extra_args: Vec::new(),
        }
    }
}

impl BrowserManagerConfig {
    /// Get the profile directory, falling back to the user cache directory.
    pub fn get_profile_dir(&self) -> PathBuf {
        self.profile_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("pagelayer")
                .join("chrome-profile")
        })
    }

    /// Get the CDP endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("http://127.0.0.1:{}", self.debug_port)
    }
}
