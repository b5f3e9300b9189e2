use crate::error::CoreError;
use crate::ids::{CompanyId, Period};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A company attached to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

/// One period's financial statements in normalized, numeric form.
///
/// This is the only input shape the metrics engine accepts. Every monetary
/// field is a plain `f64` in the same currency unit, and every field that was
/// absent at the boundary is zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialRecord {
    // I. Income Statement
    pub total_revenue: f64,
    pub gross_profit: f64,
    pub net_income: f64,
    pub operating_income: f64,
    pub cost_of_goods_sold: f64,
    pub operating_expenses: f64,

    // II. Balance Sheet
    pub total_assets: f64,
    pub current_assets: f64,
    pub inventory: f64,
    pub accounts_receivable: f64,
    pub total_liabilities: f64,
    pub current_liabilities: f64,
    pub accounts_payable: f64,
    pub total_equity: f64,

    // III. Cash Flow
    pub operating_cash_flow: f64,
    pub investing_cash_flow: f64,
    pub financing_cash_flow: f64,

    // IV. Customers
    pub marketing_spend: f64,
    pub new_customers: u64,
    pub total_customers: u64,
}

/// A monetary value as it arrives from storage.
///
/// The ledger keeps amounts as decimal strings (`"1250.50"`) so they survive
/// round trips without float rounding. Plain JSON numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Text(String),
    Number(f64),
}

impl RawAmount {
    /// Converts the stored value into a float, treating an empty string as zero.
    pub fn to_f64(&self, field: &str) -> Result<f64, CoreError> {
        match self {
            RawAmount::Number(value) => Ok(*value),
            RawAmount::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(0.0);
                }
                let decimal = Decimal::from_str(trimmed)
                    .or_else(|_| Decimal::from_scientific(trimmed))
                    .map_err(|_| CoreError::InvalidInput(field.to_string(), text.clone()))?;
                decimal
                    .to_f64()
                    .ok_or_else(|| CoreError::InvalidInput(field.to_string(), text.clone()))
            }
        }
    }
}

/// The storage representation of one company's statements for one period.
///
/// Every financial field is optional. `normalize` is the boundary where the
/// optional decimal strings become a fully-populated `FinancialRecord`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementEntry {
    pub company_id: CompanyId,
    pub period: Period,

    #[serde(default)]
    pub total_revenue: Option<RawAmount>,
    #[serde(default)]
    pub gross_profit: Option<RawAmount>,
    #[serde(default)]
    pub net_income: Option<RawAmount>,
    #[serde(default)]
    pub operating_income: Option<RawAmount>,
    #[serde(default)]
    pub cost_of_goods_sold: Option<RawAmount>,
    #[serde(default)]
    pub operating_expenses: Option<RawAmount>,

    #[serde(default)]
    pub total_assets: Option<RawAmount>,
    #[serde(default)]
    pub current_assets: Option<RawAmount>,
    #[serde(default)]
    pub inventory: Option<RawAmount>,
    #[serde(default)]
    pub accounts_receivable: Option<RawAmount>,
    #[serde(default)]
    pub total_liabilities: Option<RawAmount>,
    #[serde(default)]
    pub current_liabilities: Option<RawAmount>,
    #[serde(default)]
    pub accounts_payable: Option<RawAmount>,
    #[serde(default)]
    pub total_equity: Option<RawAmount>,

    #[serde(default)]
    pub operating_cash_flow: Option<RawAmount>,
    #[serde(default)]
    pub investing_cash_flow: Option<RawAmount>,
    #[serde(default)]
    pub financing_cash_flow: Option<RawAmount>,

    #[serde(default)]
    pub marketing_spend: Option<RawAmount>,
    #[serde(default)]
    pub new_customers: Option<u64>,
    #[serde(default)]
    pub total_customers: Option<u64>,
}

fn amount(value: &Option<RawAmount>, field: &str) -> Result<f64, CoreError> {
    match value {
        Some(raw) => raw.to_f64(field),
        None => Ok(0.0),
    }
}

impl StatementEntry {
    /// Creates an entry with every financial field absent.
    pub fn empty(company_id: CompanyId, period: Period) -> Self {
        Self {
            company_id,
            period,
            total_revenue: None,
            gross_profit: None,
            net_income: None,
            operating_income: None,
            cost_of_goods_sold: None,
            operating_expenses: None,
            total_assets: None,
            current_assets: None,
            inventory: None,
            accounts_receivable: None,
            total_liabilities: None,
            current_liabilities: None,
            accounts_payable: None,
            total_equity: None,
            operating_cash_flow: None,
            investing_cash_flow: None,
            financing_cash_flow: None,
            marketing_spend: None,
            new_customers: None,
            total_customers: None,
        }
    }

    /// Parses every stored field into a `FinancialRecord`.
    ///
    /// Absent fields and empty strings become zero. A string that is not a
    /// decimal number fails with `CoreError::InvalidInput` naming the field.
    pub fn normalize(&self) -> Result<FinancialRecord, CoreError> {
        let record = FinancialRecord {
            total_revenue: amount(&self.total_revenue, "totalRevenue")?,
            gross_profit: amount(&self.gross_profit, "grossProfit")?,
            net_income: amount(&self.net_income, "netIncome")?,
            operating_income: amount(&self.operating_income, "operatingIncome")?,
            cost_of_goods_sold: amount(&self.cost_of_goods_sold, "costOfGoodsSold")?,
            operating_expenses: amount(&self.operating_expenses, "operatingExpenses")?,
            total_assets: amount(&self.total_assets, "totalAssets")?,
            current_assets: amount(&self.current_assets, "currentAssets")?,
            inventory: amount(&self.inventory, "inventory")?,
            accounts_receivable: amount(&self.accounts_receivable, "accountsReceivable")?,
            total_liabilities: amount(&self.total_liabilities, "totalLiabilities")?,
            current_liabilities: amount(&self.current_liabilities, "currentLiabilities")?,
            accounts_payable: amount(&self.accounts_payable, "accountsPayable")?,
            total_equity: amount(&self.total_equity, "totalEquity")?,
            operating_cash_flow: amount(&self.operating_cash_flow, "operatingCashFlow")?,
            investing_cash_flow: amount(&self.investing_cash_flow, "investingCashFlow")?,
            financing_cash_flow: amount(&self.financing_cash_flow, "financingCashFlow")?,
            marketing_spend: amount(&self.marketing_spend, "marketingSpend")?,
            new_customers: self.new_customers.unwrap_or(0),
            total_customers: self.total_customers.unwrap_or(0),
        };

        tracing::trace!(company = %self.company_id, period = %self.period, "Normalized statement entry.");
        Ok(record)
    }
}
