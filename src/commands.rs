use crate::cli::{CompanyArgs, MetricsArgs};
use crate::render;
use analytics::MetricsEngine;
use anyhow::{Context, Result};
use configuration::OutputFormat;
use core_types::{CompanyId, Period};
use database::RecordSource;
use serde_json::to_string_pretty;

/// Everything a command needs, owned by `main` and passed down by reference.
pub struct AppContext<'a> {
    pub source: &'a dyn RecordSource,
    pub engine: MetricsEngine,
    pub format: OutputFormat,
}

/// Interprets the comparison argument. Absent, blank or `none` means no comparison.
pub fn parse_compare_period(raw: Option<&str>) -> Result<Option<Period>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) if value.eq_ignore_ascii_case("none") => Ok(None),
        Some(value) => Ok(Some(Period::parse(value)?)),
    }
}

/// # metrics --company C --period P [--compare-period Q]
pub fn handle_metrics(ctx: &AppContext<'_>, args: &MetricsArgs) -> Result<String> {
    let company = CompanyId::parse(&args.company)?;
    let period = Period::parse(&args.period)?;
    let compare_period = parse_compare_period(args.compare_period.as_deref())?;

    tracing::info!(%company, %period, compare = ?compare_period, "Computing metrics.");

    let current = ctx
        .source
        .fetch(&company, &period)
        .with_context(|| format!("Financial data for {company} in {period} not found"))?;
    let previous = match &compare_period {
        Some(compare) => Some(ctx.source.fetch(&company, compare).with_context(|| {
            format!("Comparison data for {company} in {compare} not found")
        })?),
        None => None,
    };

    let metrics = ctx.engine.compute(&current, previous.as_ref());

    match ctx.format {
        OutputFormat::Json => Ok(to_string_pretty(&metrics)?),
        OutputFormat::Table => Ok(render::metrics_table(&metrics)),
    }
}

/// # history --company C
pub fn handle_history(ctx: &AppContext<'_>, args: &CompanyArgs) -> Result<String> {
    let company = CompanyId::parse(&args.company)?;
    tracing::info!(%company, "Computing metric history.");

    let records = ctx
        .source
        .history(&company)
        .with_context(|| format!("Failed to load history for {company}"))?;
    let history = ctx.engine.history(&records);

    match ctx.format {
        OutputFormat::Json => Ok(to_string_pretty(&history)?),
        OutputFormat::Table => Ok(render::history_table(&history)),
    }
}

/// # periods --company C
pub fn handle_periods(ctx: &AppContext<'_>, args: &CompanyArgs) -> Result<String> {
    let company = CompanyId::parse(&args.company)?;
    let periods = ctx.source.periods(&company)?;

    match ctx.format {
        OutputFormat::Json => Ok(to_string_pretty(&periods)?),
        OutputFormat::Table => Ok(render::periods_table(&periods)),
    }
}

/// # companies
pub fn handle_companies(ctx: &AppContext<'_>) -> Result<String> {
    let companies = ctx.source.companies()?;

    match ctx.format {
        OutputFormat::Json => Ok(to_string_pretty(&companies)?),
        OutputFormat::Table => Ok(render::companies_table(&companies)),
    }
}
