use crate::error::DbError;
use crate::loader::LedgerFile;
use core_types::{Company, CompanyId, FinancialRecord, Period};
use std::collections::BTreeMap;

/// The boundary through which callers obtain normalized statements.
///
/// Implementations hand out records that are already parsed to numbers, so
/// that everything downstream can treat them as total.
pub trait RecordSource: Send + Sync {
    /// All companies known to this source.
    fn companies(&self) -> Result<Vec<Company>, DbError>;

    /// The periods stored for a company, in ascending order.
    fn periods(&self, company: &CompanyId) -> Result<Vec<Period>, DbError>;

    /// The statements of one company for one period.
    fn fetch(&self, company: &CompanyId, period: &Period) -> Result<FinancialRecord, DbError>;

    /// Every stored period of a company with its statements, in ascending order.
    fn history(&self, company: &CompanyId) -> Result<Vec<(Period, FinancialRecord)>, DbError>;
}

/// An in-memory, read-only `RecordSource` built from a JSON ledger.
#[derive(Debug, Clone, Default)]
pub struct LedgerRepository {
    companies: BTreeMap<CompanyId, Company>,
    records: BTreeMap<CompanyId, BTreeMap<Period, FinancialRecord>>,
}

impl LedgerRepository {
    /// Normalizes every statement of the ledger and indexes it by company and period.
    ///
    /// A later statement for the same company and period replaces the earlier
    /// one. Statements referencing a company that is not listed are rejected.
    pub fn from_ledger(ledger: LedgerFile) -> Result<Self, DbError> {
        let mut repository = Self::default();

        for company in ledger.companies {
            repository.records.entry(company.id.clone()).or_default();
            repository.companies.insert(company.id.clone(), company);
        }

        for entry in ledger.statements {
            let Some(periods) = repository.records.get_mut(&entry.company_id) else {
                return Err(DbError::UnknownCompany {
                    company: entry.company_id,
                    period: entry.period,
                });
            };

            let record = entry.normalize()?;
            if periods.insert(entry.period.clone(), record).is_some() {
                tracing::warn!(
                    company = %entry.company_id,
                    period = %entry.period,
                    "Duplicate statement in ledger; keeping the later entry."
                );
            }
        }

        Ok(repository)
    }

    pub fn company_count(&self) -> usize {
        self.companies.len()
    }

    fn periods_for(
        &self,
        company: &CompanyId,
    ) -> Result<&BTreeMap<Period, FinancialRecord>, DbError> {
        self.records
            .get(company)
            .ok_or_else(|| DbError::CompanyNotFound(company.clone()))
    }
}

impl RecordSource for LedgerRepository {
    fn companies(&self) -> Result<Vec<Company>, DbError> {
        Ok(self.companies.values().cloned().collect())
    }

    fn periods(&self, company: &CompanyId) -> Result<Vec<Period>, DbError> {
        Ok(self.periods_for(company)?.keys().cloned().collect())
    }

    fn fetch(&self, company: &CompanyId, period: &Period) -> Result<FinancialRecord, DbError> {
        self.periods_for(company)?
            .get(period)
            .copied()
            .ok_or_else(|| DbError::NotFound {
                company: company.clone(),
                period: period.clone(),
            })
    }

    fn history(&self, company: &CompanyId) -> Result<Vec<(Period, FinancialRecord)>, DbError> {
        Ok(self
            .periods_for(company)?
            .iter()
            .map(|(period, record)| (period.clone(), *record))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{RawAmount, StatementEntry};

    fn company(id: &str) -> Company {
        Company {
            id: CompanyId::parse(id).unwrap(),
            name: id.to_uppercase(),
            industry: None,
        }
    }

    fn statement(company: &str, period: &str, revenue: &str) -> StatementEntry {
        let mut entry = StatementEntry::empty(
            CompanyId::parse(company).unwrap(),
            Period::parse(period).unwrap(),
        );
        entry.total_revenue = Some(RawAmount::Text(revenue.to_string()));
        entry
    }

    #[test]
    fn later_duplicates_replace_earlier_ones() {
        let ledger = LedgerFile {
            companies: vec![company("acme")],
            statements: vec![
                statement("acme", "2024", "100.00"),
                statement("acme", "2024", "250.00"),
            ],
        };
        let repo = LedgerRepository::from_ledger(ledger).unwrap();
        let acme = CompanyId::parse("acme").unwrap();
        let record = repo.fetch(&acme, &Period::parse("2024").unwrap()).unwrap();
        assert_eq!(record.total_revenue, 250.0);
        assert_eq!(repo.periods(&acme).unwrap().len(), 1);
    }

    #[test]
    fn statements_for_unlisted_companies_are_rejected() {
        let ledger = LedgerFile {
            companies: vec![company("acme")],
            statements: vec![statement("globex", "2024", "1")],
        };
        let err = LedgerRepository::from_ledger(ledger).unwrap_err();
        assert!(matches!(err, DbError::UnknownCompany { .. }));
    }

    #[test]
    fn unparseable_amounts_fail_the_load() {
        let ledger = LedgerFile {
            companies: vec![company("acme")],
            statements: vec![statement("acme", "2024", "twelve")],
        };
        let err = LedgerRepository::from_ledger(ledger).unwrap_err();
        assert!(matches!(err, DbError::InvalidRecord(_)));
    }

    #[test]
    fn companies_without_statements_have_empty_history() {
        let ledger = LedgerFile {
            companies: vec![company("acme")],
            statements: vec![],
        };
        let repo = LedgerRepository::from_ledger(ledger).unwrap();
        let acme = CompanyId::parse("acme").unwrap();
        assert!(repo.history(&acme).unwrap().is_empty());
        assert!(matches!(
            repo.fetch(&acme, &Period::parse("2024").unwrap()),
            Err(DbError::NotFound { .. })
        ));
    }

    #[test]
    fn unknown_company_lookups_fail() {
        let repo = LedgerRepository::default();
        let err = repo.periods(&CompanyId::parse("ghost").unwrap()).unwrap_err();
        assert!(matches!(err, DbError::CompanyNotFound(_)));
    }
}
