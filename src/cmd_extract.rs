//! One-shot `extract` command.

use std::path::Path;

use tracing::{debug, warn};

use pagelayer_browser::{RenderRequest, Renderer};
use pagelayer_config::Config;
use pagelayer_core::Viewport;

use crate::server::build_renderer;

/// Render `file` once and print the result as JSON on stdout.
pub(crate) async fn run_extract(
    config: Config,
    file: &Path,
    width: Option<u32>,
    height: Option<u32>,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let html = tokio::fs::read_to_string(file)
        .await
        .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
    let request = build_request(html, &config, width, height);
    debug!("Extracting {} ({} bytes)", file.display(), request.html.len());

    let renderer = build_renderer(&config);
    let outcome = renderer.render(request).await;
    if let Err(e) = renderer.shutdown().await {
        warn!("Browser shutdown failed: {}", e);
    }

    let result = outcome?;
    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);
    Ok(())
}

/// Apply CLI viewport overrides on top of `[render]`.
fn build_request(html: String, config: &Config, width: Option<u32>, height: Option<u32>) -> RenderRequest {
    let default = config.render.viewport();
    let request = RenderRequest::new(html);
    if width.is_none() && height.is_none() {
        return request;
    }
    request.with_viewport(Viewport::new(
        width.unwrap_or(default.width),
        height.unwrap_or(default.height),
    ))
}
