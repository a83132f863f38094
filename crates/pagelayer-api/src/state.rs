//! Application state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use pagelayer_browser::Renderer;
use pagelayer_core::Viewport;

/// Application state shared across handlers.
pub struct AppState {
    pub renderer: Arc<dyn Renderer>,
    /// Fills in viewport fields a request leaves out.
    pub default_viewport: Viewport,
    start_time: Instant,
    render_count: AtomicU64,
    failure_count: AtomicU64,
}

impl AppState {
    pub fn new(renderer: Arc<dyn Renderer>, default_viewport: Viewport) -> Self {
        Self {
            renderer,
            default_viewport,
            start_time: Instant::now(),
            render_count: AtomicU64::new(0),
            failure_count: AtomicU64::new(0),
        }
    }

    /// Get uptime.
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Record a finished render.
    pub fn record_render(&self, success: bool) {
        self.render_count.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.failure_count.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Renders attempted since start.
    pub fn render_count(&self) -> u64 {
        self.render_count.load(Ordering::Relaxed)
    }

    /// Renders that returned an error.
    pub fn failure_count(&self) -> u64 {
        self.failure_count.load(Ordering::Relaxed)
    }
}
