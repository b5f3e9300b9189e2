use core_types::Period;
use serde::{Deserialize, Serialize};

/// The dashboard's KPI groupings, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricCategory {
    Profitability,
    Liquidity,
    Efficiency,
    Leverage,
    Growth,
}

impl MetricCategory {
    pub const ALL: [MetricCategory; 5] = [
        MetricCategory::Profitability,
        MetricCategory::Liquidity,
        MetricCategory::Efficiency,
        MetricCategory::Leverage,
        MetricCategory::Growth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricCategory::Profitability => "Profitability",
            MetricCategory::Liquidity => "Liquidity",
            MetricCategory::Efficiency => "Efficiency",
            MetricCategory::Leverage => "Leverage",
            MetricCategory::Growth => "Growth",
        }
    }
}

/// Period-over-period deltas, present only when a comparison period was given.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSet {
    /// Percent change in revenue.
    pub revenue_change: f64,
    /// Percentage-point difference in net profit margin.
    pub net_profit_margin_change: f64,
    /// Percent change in operating cash flow.
    pub operating_cash_flow_change: f64,
    /// Percentage-point difference in return on equity.
    pub roe_change: f64,
}

/// The full set of KPIs derived from one period's statements.
///
/// Margins and returns are percentages on a 0-100 scale, turnovers and
/// ratios are plain multiples, `dso`/`dio`/`dpo`/`ccc` are days, and
/// `working_capital`, `free_cash_flow`, `cac` and `ltv` are currency amounts.
/// Every field is finite; a ratio with a non-positive denominator is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSet {
    // I. Profitability
    pub gross_profit_margin: f64,
    pub net_profit_margin: f64,
    pub operating_margin: f64,
    pub roe: f64,
    pub roa: f64,
    pub cac: f64,
    pub ebitda_margin: f64,

    // II. Liquidity
    pub current_ratio: f64,
    pub quick_ratio: f64,
    pub working_capital: f64,
    pub dso: f64,
    pub dio: f64,
    pub dpo: f64,
    pub ccc: f64,

    // III. Efficiency
    pub inventory_turnover: f64,
    pub ar_turnover: f64,
    pub ap_turnover: f64,
    pub asset_turnover: f64,
    pub ltv: f64,

    // IV. Leverage
    pub debt_to_equity: f64,
    pub debt_ratio: f64,
    pub free_cash_flow: f64,
    pub operating_cash_flow_ratio: f64,

    // V. Growth
    pub revenue_growth: f64,
    pub customer_growth: f64,
    pub profit_growth: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<ChangeSet>,
}

impl MetricSet {
    /// Creates a new, zeroed-out MetricSet with no comparison block.
    pub fn new() -> Self {
        Self {
            gross_profit_margin: 0.0,
            net_profit_margin: 0.0,
            operating_margin: 0.0,
            roe: 0.0,
            roa: 0.0,
            cac: 0.0,
            ebitda_margin: 0.0,
            current_ratio: 0.0,
            quick_ratio: 0.0,
            working_capital: 0.0,
            dso: 0.0,
            dio: 0.0,
            dpo: 0.0,
            ccc: 0.0,
            inventory_turnover: 0.0,
            ar_turnover: 0.0,
            ap_turnover: 0.0,
            asset_turnover: 0.0,
            ltv: 0.0,
            debt_to_equity: 0.0,
            debt_ratio: 0.0,
            free_cash_flow: 0.0,
            operating_cash_flow_ratio: 0.0,
            revenue_growth: 0.0,
            customer_growth: 0.0,
            profit_growth: 0.0,
            changes: None,
        }
    }

    /// Labelled values for one category, in display order.
    pub fn by_category(&self, category: MetricCategory) -> Vec<(&'static str, f64)> {
        match category {
            MetricCategory::Profitability => vec![
                ("Gross profit margin (%)", self.gross_profit_margin),
                ("Net profit margin (%)", self.net_profit_margin),
                ("Operating margin (%)", self.operating_margin),
                ("EBITDA margin (%)", self.ebitda_margin),
                ("Return on equity (%)", self.roe),
                ("Return on assets (%)", self.roa),
                ("Customer acquisition cost", self.cac),
            ],
            MetricCategory::Liquidity => vec![
                ("Current ratio", self.current_ratio),
                ("Quick ratio", self.quick_ratio),
                ("Working capital", self.working_capital),
                ("Days sales outstanding", self.dso),
                ("Days inventory outstanding", self.dio),
                ("Days payable outstanding", self.dpo),
                ("Cash conversion cycle (days)", self.ccc),
            ],
            MetricCategory::Efficiency => vec![
                ("Inventory turnover", self.inventory_turnover),
                ("Receivables turnover", self.ar_turnover),
                ("Payables turnover", self.ap_turnover),
                ("Asset turnover", self.asset_turnover),
                ("Customer lifetime value", self.ltv),
            ],
            MetricCategory::Leverage => vec![
                ("Debt to equity", self.debt_to_equity),
                ("Debt ratio", self.debt_ratio),
                ("Free cash flow", self.free_cash_flow),
                ("Operating cash flow ratio", self.operating_cash_flow_ratio),
            ],
            MetricCategory::Growth => vec![
                ("Revenue growth (%)", self.revenue_growth),
                ("Customer growth (%)", self.customer_growth),
                ("Profit growth (%)", self.profit_growth),
            ],
        }
    }

    /// Every numeric field, including the comparison block when present.
    pub fn values(&self) -> Vec<f64> {
        let mut values: Vec<f64> = MetricCategory::ALL
            .iter()
            .flat_map(|category| self.by_category(*category))
            .map(|(_, value)| value)
            .collect();
        if let Some(changes) = &self.changes {
            values.extend([
                changes.revenue_change,
                changes.net_profit_margin_change,
                changes.operating_cash_flow_change,
                changes.roe_change,
            ]);
        }
        values
    }
}

impl Default for MetricSet {
    fn default() -> Self {
        Self::new()
    }
}

/// One point of a company's metric history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub period: Period,
    #[serde(flatten)]
    pub metrics: MetricSet,
}
