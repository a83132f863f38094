//! CLI definitions for pagelayer.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pagelayer CLI.
#[derive(Parser)]
#[command(name = "pagelayer")]
#[command(about = "Render HTML in headless Chrome and extract a pruned layout tree")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    /// Server host (overrides [server].host)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Server port (overrides [server].port)
    #[arg(long, env = "PORT", global = true)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the render server in foreground (default)
    Run,

    /// Render a local HTML file once and print the extraction as JSON
    Extract {
        /// HTML file to render
        file: PathBuf,

        /// Viewport width (overrides [render].viewport_width)
        #[arg(long)]
        width: Option<u32>,

        /// Viewport height (overrides [render].viewport_height)
        #[arg(long)]
        height: Option<u32>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["pagelayer"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
    }

    #[test]
    fn test_run_overrides() {
        let cli = Cli::try_parse_from(["pagelayer", "run", "--host", "0.0.0.0", "--port", "8080"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Run)));
        assert_eq!(cli.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(cli.port, Some(8080));
    }

    #[test]
    fn test_extract_args() {
        let cli = Cli::try_parse_from([
            "pagelayer",
            "extract",
            "page.html",
            "--width",
            "390",
            "--pretty",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        match cli.command {
            Some(Commands::Extract {
                file,
                width,
                height,
                pretty,
            }) => {
                assert_eq!(file, PathBuf::from("page.html"));
                assert_eq!(width, Some(390));
                assert_eq!(height, None);
                assert!(pretty);
            }
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn test_extract_requires_file() {
        assert!(Cli::try_parse_from(["pagelayer", "extract"]).is_err());
    }
}
