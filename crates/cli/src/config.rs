//! Runtime configuration for the `todo` binary.
//!
//! Values are layered with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. Compiled defaults
//!
//! `RUST_LOG`, when set, replaces the resolved log level entirely.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;

/// How command results are written to stdout
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON documents
    Json,
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level filter string.
    pub log_level: String,
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        let log_level = cli.log_level.trim();

        Self {
            log_level: if log_level.is_empty() {
                defaults.log_level
            } else {
                log_level.to_string()
            },
            format: cli.format,
        }
    }

    /// Build the tracing filter, preferring `RUST_LOG` when present
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .unwrap_or_else(|_| EnvFilter::new(Self::default().log_level))
    }

    /// Install the global subscriber; logs go to stderr so stdout only
    /// carries command output.
    pub fn init_tracing(&self) {
        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
