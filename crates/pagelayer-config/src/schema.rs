//! Configuration schema definitions.

use std::path::PathBuf;

use pagelayer_core::{ExtractConfig, Viewport};
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub extract: ExtractConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted request body.
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_body_limit() -> usize {
    10 * 1024 * 1024
}

/// Headless Chrome configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Remote debugging port.
    #[serde(default = "default_debug_port")]
    pub debug_port: u16,

    #[serde(default = "default_true")]
    pub headless: bool,

    /// Chrome executable; searched in well-known locations when unset.
    #[serde(default)]
    pub chrome_path: Option<PathBuf>,

    /// User data directory; under the user cache directory when unset.
    #[serde(default)]
    pub profile_dir: Option<PathBuf>,

    /// How long to wait for the debugging endpoint after launch.
    #[serde(default = "default_launch_timeout")]
    pub launch_timeout_ms: u64,

    /// Disable script execution in rendered documents.
    #[serde(default = "default_true")]
    pub disable_javascript: bool,

    /// Additional Chrome switches, e.g. `--no-sandbox` in containers.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            debug_port: default_debug_port(),
            headless: true,
            chrome_path: None,
            profile_dir: None,
            launch_timeout_ms: default_launch_timeout(),
            disable_javascript: true,
            extra_args: Vec::new(),
        }
    }
}

fn default_debug_port() -> u16 {
    9222
}

fn default_launch_timeout() -> u64 {
    6000
}

fn default_true() -> bool {
    true
}

/// Render harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,

    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,

    /// Fixed delay after load before extraction.
    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u64,

    /// Upper bound on waiting for the document to finish loading.
    #[serde(default = "default_stabilization_timeout")]
    pub stabilization_timeout_ms: u64,

    /// Body padding injected by the normalization template.
    #[serde(default = "default_body_padding")]
    pub body_padding_px: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            settle_delay_ms: default_settle_delay(),
            stabilization_timeout_ms: default_stabilization_timeout(),
            body_padding_px: default_body_padding(),
        }
    }
}

impl RenderConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }
}

fn default_viewport_width() -> u32 {
    1280
}

fn default_viewport_height() -> u32 {
    800
}

fn default_settle_delay() -> u64 {
    2000
}

fn default_stabilization_timeout() -> u64 {
    15000
}

fn default_body_padding() -> u32 {
    20
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for daily rolling log files; console only when unset.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            log_dir: None,
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
