use clap::{Parser, Subcommand};
use configuration::OutputFormat;
use std::path::PathBuf;

/// Derives financial KPIs from a company's periodic statements.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, env = "FINLENS_CONFIG", default_value = "config.toml")]
    pub config: PathBuf,

    /// Ledger file to read statements from, overriding the configured path.
    #[arg(long, global = true)]
    pub ledger: Option<PathBuf>,

    /// Output format, overriding the configured one.
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the KPIs of one period, optionally compared with another.
    Metrics(MetricsArgs),
    /// Compute the KPIs of every stored period, oldest first.
    History(CompanyArgs),
    /// List the periods stored for a company.
    Periods(CompanyArgs),
    /// List the companies in the ledger.
    Companies,
}

#[derive(Parser, Debug)]
pub struct MetricsArgs {
    /// The company to report on.
    #[arg(long)]
    pub company: String,

    /// The period to report (e.g., "2024", "2024-Q1").
    #[arg(long)]
    pub period: String,

    /// The period to compare against. "none" disables the comparison.
    #[arg(long)]
    pub compare_period: Option<String>,
}

#[derive(Parser, Debug)]
pub struct CompanyArgs {
    /// The company to report on.
    #[arg(long)]
    pub company: String,
}
