use crate::error::DbError;
use crate::repository::LedgerRepository;
use core_types::{Company, StatementEntry};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The on-disk shape of a ledger: the attached companies and every stored
/// statement, with amounts as decimal strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerFile {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub statements: Vec<StatementEntry>,
}

/// Opens and loads the ledger at `path`.
pub fn open(path: &Path) -> Result<LedgerRepository, DbError> {
    let file = File::open(path).map_err(|source| DbError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let repository = from_reader(BufReader::new(file))?;

    tracing::info!(
        path = %path.display(),
        companies = repository.company_count(),
        "Ledger loaded."
    );
    Ok(repository)
}

/// Loads a ledger from any JSON source.
pub fn from_reader<R: Read>(reader: R) -> Result<LedgerRepository, DbError> {
    let ledger: LedgerFile = serde_json::from_reader(reader)?;
    LedgerRepository::from_ledger(ledger)
}
