use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_logging;
pub use settings::{Config, LedgerSettings, LoggingSettings, OutputFormat, OutputSettings};

const ENV_PREFIX: &str = "FINLENS";

/// Loads the application configuration from a TOML file and the environment.
///
/// The file is optional; missing sections fall back to their defaults.
/// Environment variables such as `FINLENS__LEDGER__PATH` override file values.
/// The merged result is validated before it is returned.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "Loaded configuration.");
    Ok(config)
}
