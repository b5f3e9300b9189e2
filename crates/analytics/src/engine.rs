use crate::report::{ChangeSet, HistoryPoint, MetricSet};
use core_types::{FinancialRecord, Period};

const PERCENT: f64 = 100.0;
const DAYS_PER_YEAR: f64 = 365.0;
/// Lifetime value is approximated as 1.5x revenue per newly acquired customer.
const LTV_MULTIPLIER: f64 = 1.5;

/// `numerator / denominator * scale`, or zero when the denominator is not
/// positive or the scaled result is not finite.
fn scaled(numerator: f64, denominator: f64, scale: f64) -> f64 {
    if denominator <= 0.0 || denominator.is_nan() {
        return 0.0;
    }
    finite(numerator / denominator * scale)
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    scaled(numerator, denominator, 1.0)
}

fn percent(numerator: f64, denominator: f64) -> f64 {
    scaled(numerator, denominator, PERCENT)
}

/// Sums and differences of extreme magnitudes can still overflow.
fn finite(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Percent change from `previous` to `current`, zero when `previous` is not positive.
fn growth(current: f64, previous: f64) -> f64 {
    percent(current - previous, previous)
}

/// A stateless calculator for deriving KPIs from financial statements.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating the KPIs of one period.
    ///
    /// # Arguments
    ///
    /// * `current` - The normalized statements of the period being reported.
    /// * `previous` - The comparison period, if any. When given, the growth
    ///   fields are filled and a `ChangeSet` is attached.
    ///
    /// Every division whose denominator is zero or negative yields zero, so
    /// the result is always finite and this never fails.
    pub fn compute(
        &self,
        current: &FinancialRecord,
        previous: Option<&FinancialRecord>,
    ) -> MetricSet {
        let mut report = MetricSet::new();

        self.calculate_profitability(current, &mut report);
        self.calculate_liquidity(current, &mut report);
        self.calculate_efficiency(current, &mut report);
        self.calculate_leverage(current, &mut report);

        if let Some(previous) = previous {
            self.calculate_growth(current, previous, &mut report);
            report.changes = Some(self.calculate_changes(current, previous, &report));
        }

        tracing::debug!(
            revenue = current.total_revenue,
            compared = previous.is_some(),
            "Computed metric set."
        );
        report
    }

    /// Builds a metric history, one point per period in ascending period order.
    ///
    /// Each point is computed on its own, so growth fields are zero and no
    /// `ChangeSet` is attached.
    pub fn history(&self, records: &[(Period, FinancialRecord)]) -> Vec<HistoryPoint> {
        let mut ordered: Vec<&(Period, FinancialRecord)> = records.iter().collect();
        ordered.sort_by(|a, b| a.0.cmp(&b.0));

        ordered
            .into_iter()
            .map(|(period, record)| HistoryPoint {
                period: period.clone(),
                metrics: self.compute(record, None),
            })
            .collect()
    }

    fn calculate_profitability(&self, r: &FinancialRecord, report: &mut MetricSet) {
        report.gross_profit_margin = percent(r.gross_profit, r.total_revenue);
        report.net_profit_margin = percent(r.net_income, r.total_revenue);
        report.operating_margin = percent(r.operating_income, r.total_revenue);
        report.roe = percent(r.net_income, r.total_equity);
        report.roa = percent(r.net_income, r.total_assets);
        report.cac = ratio(r.marketing_spend, r.new_customers as f64);
        // Depreciation and amortization are not captured, so operating income stands in for EBITDA.
        report.ebitda_margin = percent(r.operating_income, r.total_revenue);
    }

    fn calculate_liquidity(&self, r: &FinancialRecord, report: &mut MetricSet) {
        report.current_ratio = ratio(r.current_assets, r.current_liabilities);
        report.quick_ratio = ratio(r.current_assets - r.inventory, r.current_liabilities);
        report.working_capital = finite(r.current_assets - r.current_liabilities);

        report.dso = scaled(r.accounts_receivable, r.total_revenue, DAYS_PER_YEAR);
        report.dio = scaled(r.inventory, r.cost_of_goods_sold, DAYS_PER_YEAR);
        report.dpo = scaled(r.accounts_payable, r.cost_of_goods_sold, DAYS_PER_YEAR);
        report.ccc = finite(report.dio + report.dso - report.dpo);
    }

    fn calculate_efficiency(&self, r: &FinancialRecord, report: &mut MetricSet) {
        report.inventory_turnover = ratio(r.cost_of_goods_sold, r.inventory);
        report.ar_turnover = ratio(r.total_revenue, r.accounts_receivable);
        report.ap_turnover = ratio(r.cost_of_goods_sold, r.accounts_payable);
        report.asset_turnover = ratio(r.total_revenue, r.total_assets);
        report.ltv = scaled(r.total_revenue, r.new_customers as f64, LTV_MULTIPLIER);
    }

    fn calculate_leverage(&self, r: &FinancialRecord, report: &mut MetricSet) {
        report.debt_to_equity = ratio(r.total_liabilities, r.total_equity);
        report.debt_ratio = ratio(r.total_liabilities, r.total_assets);
        // Investing cash flow is usually negative, so this is a sum.
        report.free_cash_flow = finite(r.operating_cash_flow + r.investing_cash_flow);
        report.operating_cash_flow_ratio = ratio(r.operating_cash_flow, r.current_liabilities);
    }

    fn calculate_growth(
        &self,
        current: &FinancialRecord,
        previous: &FinancialRecord,
        report: &mut MetricSet,
    ) {
        report.revenue_growth = growth(current.total_revenue, previous.total_revenue);
        report.customer_growth = growth(
            current.total_customers as f64,
            previous.total_customers as f64,
        );
        report.profit_growth = growth(current.net_income, previous.net_income);
    }

    fn calculate_changes(
        &self,
        current: &FinancialRecord,
        previous: &FinancialRecord,
        report: &MetricSet,
    ) -> ChangeSet {
        let previous_net_margin = percent(previous.net_income, previous.total_revenue);
        let previous_roe = percent(previous.net_income, previous.total_equity);

        ChangeSet {
            revenue_change: growth(current.total_revenue, previous.total_revenue),
            net_profit_margin_change: finite(report.net_profit_margin - previous_net_margin),
            operating_cash_flow_change: growth(
                current.operating_cash_flow,
                previous.operating_cash_flow,
            ),
            roe_change: finite(report.roe - previous_roe),
        }
    }
}
