use analytics::MetricsEngine;
use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use commands::AppContext;

mod cli;
mod commands;
mod render;

/// The main entry point for the finlens command-line dashboard.
fn main() -> Result<()> {
    // A .env file is optional; it may carry FINLENS__* overrides or RUST_LOG.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = configuration::load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    // Held until exit so the file appender flushes.
    let _log_guard = configuration::init_logging(&config.logging)?;

    let ledger_path = cli.ledger.clone().unwrap_or_else(|| config.ledger.path.clone());
    let repository = database::open(&ledger_path)?;

    let ctx = AppContext {
        source: &repository,
        engine: MetricsEngine::new(),
        format: cli.format.unwrap_or(config.output.format),
    };

    let output = match &cli.command {
        Commands::Metrics(args) => commands::handle_metrics(&ctx, args)?,
        Commands::History(args) => commands::handle_history(&ctx, args)?,
        Commands::Periods(args) => commands::handle_periods(&ctx, args)?,
        Commands::Companies => commands::handle_companies(&ctx)?,
    };

    println!("{output}");
    Ok(())
}
