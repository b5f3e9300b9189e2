use core_types::{CompanyId, CoreError, Period};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to read ledger file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("An error occurred during JSON deserialization: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("A stored statement could not be normalized: {0}")]
    InvalidRecord(#[from] CoreError),

    #[error("Statement for period {period} references unknown company {company}")]
    UnknownCompany { company: CompanyId, period: Period },

    #[error("Company {0} was not found.")]
    CompanyNotFound(CompanyId),

    #[error("No statements found for company {company} in period {period}.")]
    NotFound { company: CompanyId, period: Period },
}
