//! Server initialization and startup logic for pagelayer.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pagelayer_api::{ApiServer, ApiServerConfig, AppState};
use pagelayer_browser::{BrowserManager, BrowserManagerConfig, ChromeRenderer, RenderOptions, Renderer};
use pagelayer_config::{Config, LoggingConfig};

/// Initialize tracing with console output and an optional daily log file.
///
/// Console output goes to stderr so `extract` can print JSON on stdout.
pub(crate) fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file_writer = match &config.log_dir {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("pagelayer")
                .filename_suffix("log")
                .max_log_files(14)
                .build(log_dir)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Flushes buffered lines on exit; must outlive the subscriber.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);
            Some(non_blocking)
        }
        None => None,
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let console_text = (!config.json).then(|| {
        fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
    });
    let console_json = config
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let file = file_writer.map(|writer| fmt::layer().with_writer(writer).with_ansi(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_text)
        .with(console_json)
        .with(file)
        .try_init()?;

    Ok(())
}

/// Browser manager settings from `[browser]`.
pub(crate) fn browser_config(config: &Config) -> BrowserManagerConfig {
    BrowserManagerConfig {
        debug_port: config.browser.debug_port,
        headless: config.browser.headless,
        chrome_path: config.browser.chrome_path.clone(),
        profile_dir: config.browser.profile_dir.clone(),
        launch_timeout: Duration::from_millis(config.browser.launch_timeout_ms),
        extra_args: config.browser.extra_args.clone(),
    }
}

/// Harness settings from `[render]`, `[browser]` and `[extract]`.
pub(crate) fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        viewport: config.render.viewport(),
        settle_delay: Duration::from_millis(config.render.settle_delay_ms),
        stabilization_timeout: Duration::from_millis(config.render.stabilization_timeout_ms),
        body_padding_px: config.render.body_padding_px,
        disable_javascript: config.browser.disable_javascript,
        extract: config.extract.clone(),
    }
}

/// Build the Chrome-backed renderer for `config`.
pub(crate) fn build_renderer(config: &Config) -> Arc<ChromeRenderer> {
    let manager = Arc::new(BrowserManager::new(browser_config(config)));
    Arc::new(ChromeRenderer::new(manager, render_options(config)))
}

/// Run the server in foreground.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let renderer = build_renderer(&config);

    // Chrome is launched lazily on the first request if this fails.
    match renderer.warm_up().await {
        Ok(()) => info!("Browser ready"),
        Err(e) => warn!("Browser warm-up failed, will retry per request: {}", e),
    }

    let state = Arc::new(AppState::new(renderer.clone(), config.render.viewport()));
    let server_config = ApiServerConfig::new(config.server.host.clone(), config.server.port)
        .with_body_limit(config.server.body_limit_bytes);

    info!("Starting pagelayer on {}", config.server.bind_addr());
    let result = ApiServer::new(server_config, state).run().await;

    if let Err(e) = renderer.shutdown().await {
        warn!("Browser shutdown failed: {}", e);
    }
    result
}
