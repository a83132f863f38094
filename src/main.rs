//! pagelayer - render HTML in headless Chrome and extract a layout tree.
//!
//! Main entry point for the pagelayer CLI and server.

mod cli;
mod cmd_extract;
mod server;

use clap::Parser;
use tracing::warn;

use pagelayer_config::{Config, ConfigError, ConfigLoader, ConfigValidator};

use crate::cli::{Cli, Commands};

/// Load the config file and reject invalid values.
fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let config = ConfigLoader::load_or_default(&cli.config)?;

    let validation = ConfigValidator::validate(&config);
    if let Some(first) = validation.errors.first() {
        return Err(ConfigError::InvalidValue {
            field: first.path.clone(),
            message: validation
                .errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        });
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = load_config(&cli)?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    server::init_tracing(&config.logging)?;
    for warning in ConfigValidator::validate(&config).warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    match cli.command {
        Some(Commands::Extract {
            file,
            width,
            height,
            pretty,
        }) => cmd_extract::run_extract(config, &file, width, height, pretty).await,
        Some(Commands::Run) | None => server::run_server(config).await,
    }
}
