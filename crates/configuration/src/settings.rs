use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The root configuration structure for the entire application.
///
/// Every section has defaults, so an absent `config.toml` is a valid setup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ledger: LedgerSettings,
    pub logging: LoggingSettings,
    pub output: OutputSettings,
}

/// Where the statement ledger is read from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LedgerSettings {
    /// Path to the JSON ledger holding companies and their statements.
    pub path: PathBuf,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("ledger.json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive such as `info` or `warn,analytics=debug`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs are also written to a daily-rolling file in this directory.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// How computed metrics are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Config {
    /// Checks the settings that deserialization alone cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ledger.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "ledger.path must not be empty".to_string(),
            ));
        }
        if EnvFilter::try_new(&self.logging.level).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "logging.level '{}' is not a valid filter directive",
                self.logging.level
            )));
        }
        Ok(())
    }
}
