use analytics::{MetricsEngine, MetricSet};
use core_types::{CompanyId, FinancialRecord, Period, RawAmount, StatementEntry};
use std::sync::Arc;
use std::thread;

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{what}: expected {expected}, got {actual}"
    );
}

fn scenario_a() -> FinancialRecord {
    FinancialRecord {
        total_revenue: 1000.0,
        gross_profit: 400.0,
        net_income: 100.0,
        total_assets: 2000.0,
        total_equity: 1000.0,
        current_assets: 500.0,
        current_liabilities: 250.0,
        inventory: 50.0,
        accounts_receivable: 100.0,
        accounts_payable: 80.0,
        cost_of_goods_sold: 600.0,
        total_liabilities: 1000.0,
        operating_cash_flow: 150.0,
        investing_cash_flow: -50.0,
        marketing_spend: 200.0,
        new_customers: 10,
        total_customers: 100,
        ..FinancialRecord::default()
    }
}

fn scenario_b_previous() -> FinancialRecord {
    FinancialRecord {
        total_revenue: 800.0,
        net_income: 80.0,
        operating_cash_flow: 100.0,
        total_equity: 900.0,
        ..FinancialRecord::default()
    }
}

fn assert_all_finite(metrics: &MetricSet) {
    for value in metrics.values() {
        assert!(value.is_finite(), "non-finite value in {metrics:?}");
    }
}

#[test]
fn single_period_metrics_match_hand_calculation() {
    let m = MetricsEngine::new().compute(&scenario_a(), None);

    assert_close(m.gross_profit_margin, 40.0, "gross profit margin");
    assert_close(m.net_profit_margin, 10.0, "net profit margin");
    assert_close(m.roe, 10.0, "roe");
    assert_close(m.roa, 5.0, "roa");
    assert_close(m.current_ratio, 2.0, "current ratio");
    assert_close(m.quick_ratio, 1.8, "quick ratio");
    assert_close(m.working_capital, 250.0, "working capital");
    assert_close(m.cac, 20.0, "cac");
    assert_close(m.debt_to_equity, 1.0, "debt to equity");
    assert_close(m.debt_ratio, 0.5, "debt ratio");
    assert_close(m.free_cash_flow, 100.0, "free cash flow");
    assert_close(m.ltv, 150.0, "ltv");
    assert_close(m.dso, 36.5, "dso");
    assert_close(m.inventory_turnover, 12.0, "inventory turnover");
    assert_close(m.ar_turnover, 10.0, "ar turnover");
    assert_close(m.ap_turnover, 7.5, "ap turnover");
    assert_close(m.asset_turnover, 0.5, "asset turnover");
    assert_close(m.operating_cash_flow_ratio, 0.6, "operating cash flow ratio");

    assert_eq!(m.revenue_growth, 0.0);
    assert_eq!(m.customer_growth, 0.0);
    assert_eq!(m.profit_growth, 0.0);
    assert!(m.changes.is_none());
}

#[test]
fn comparison_period_fills_growth_and_changes() {
    let m = MetricsEngine::new().compute(&scenario_a(), Some(&scenario_b_previous()));

    assert_close(m.revenue_growth, 25.0, "revenue growth");
    assert_close(m.profit_growth, 25.0, "profit growth");
    // Previous period has no customers recorded.
    assert_eq!(m.customer_growth, 0.0);

    let changes = m.changes.expect("comparison should attach a change set");
    assert_close(changes.revenue_change, 25.0, "revenue change");
    assert_close(changes.roe_change, 10.0 - 80.0 / 900.0 * 100.0, "roe change");
    assert!((changes.roe_change - 1.11).abs() < 0.01);
    assert_close(changes.net_profit_margin_change, 0.0, "net margin change");
    assert_close(changes.operating_cash_flow_change, 50.0, "operating cash flow change");
}

#[test]
fn customer_growth_uses_total_customers() {
    let previous = FinancialRecord {
        total_customers: 80,
        ..FinancialRecord::default()
    };
    let m = MetricsEngine::new().compute(&scenario_a(), Some(&previous));
    assert_close(m.customer_growth, 25.0, "customer growth");
}

#[test]
fn zero_revenue_zeroes_revenue_denominated_metrics() {
    let current = FinancialRecord {
        total_revenue: 0.0,
        ..scenario_a()
    };
    let m = MetricsEngine::new().compute(&current, None);

    assert_eq!(m.gross_profit_margin, 0.0);
    assert_eq!(m.net_profit_margin, 0.0);
    assert_eq!(m.operating_margin, 0.0);
    assert_eq!(m.ebitda_margin, 0.0);
    assert_eq!(m.dso, 0.0);
    assert_eq!(m.ar_turnover, 0.0);
    assert_eq!(m.asset_turnover, 0.0);
    assert_eq!(m.ltv, 0.0);
    assert_all_finite(&m);
}

#[test]
fn zero_equity_zeroes_equity_metrics() {
    let current = FinancialRecord {
        total_equity: 0.0,
        ..scenario_a()
    };
    let m = MetricsEngine::new().compute(&current, None);
    assert_eq!(m.roe, 0.0);
    assert_eq!(m.debt_to_equity, 0.0);
}

#[test]
fn negative_denominators_are_treated_as_absent() {
    let current = FinancialRecord {
        total_equity: -500.0,
        current_liabilities: -10.0,
        ..scenario_a()
    };
    let m = MetricsEngine::new().compute(&current, None);
    assert_eq!(m.roe, 0.0);
    assert_eq!(m.debt_to_equity, 0.0);
    assert_eq!(m.current_ratio, 0.0);
    assert_eq!(m.quick_ratio, 0.0);
    assert_eq!(m.operating_cash_flow_ratio, 0.0);
    assert_close(m.working_capital, 510.0, "working capital");
}

#[test]
fn all_zero_record_yields_finite_zeroes() {
    let zero = FinancialRecord::default();
    let m = MetricsEngine::new().compute(&zero, Some(&zero));
    assert_all_finite(&m);
    assert!(m.values().iter().all(|v| *v == 0.0));
    assert!(m.changes.is_some());
}

#[test]
fn working_capital_and_free_cash_flow_are_unguarded() {
    let current = FinancialRecord {
        current_assets: 100.0,
        current_liabilities: 300.0,
        operating_cash_flow: -40.0,
        investing_cash_flow: -60.0,
        ..FinancialRecord::default()
    };
    let m = MetricsEngine::new().compute(&current, None);
    assert_eq!(m.working_capital, 100.0 - 300.0);
    assert_eq!(m.free_cash_flow, -40.0 + -60.0);
}

#[test]
fn cash_conversion_cycle_components_use_their_own_guards() {
    let current = FinancialRecord {
        inventory: 0.0,
        ..scenario_a()
    };
    let m = MetricsEngine::new().compute(&current, None);
    assert_eq!(m.dio, 0.0);
    assert_eq!(m.inventory_turnover, 0.0);
    assert!(m.dpo > 0.0);
    assert_eq!(m.ccc, m.dio + m.dso - m.dpo);

    let no_cogs = FinancialRecord {
        cost_of_goods_sold: 0.0,
        ..scenario_a()
    };
    let m = MetricsEngine::new().compute(&no_cogs, None);
    assert_eq!(m.dio, 0.0);
    assert_eq!(m.dpo, 0.0);
    assert_close(m.ccc, m.dso, "ccc without cogs");
}

#[test]
fn repeated_calls_are_bit_identical() {
    let engine = MetricsEngine::new();
    let current = scenario_a();
    let previous = scenario_b_previous();

    let first = engine.compute(&current, Some(&previous));
    let second = engine.compute(&current, Some(&previous));
    let first_bits: Vec<u64> = first.values().iter().map(|v| v.to_bits()).collect();
    let second_bits: Vec<u64> = second.values().iter().map(|v| v.to_bits()).collect();
    assert_eq!(first_bits, second_bits);
}

#[test]
fn engine_can_be_shared_across_threads() {
    let engine = Arc::new(MetricsEngine::new());
    let expected = engine.compute(&scenario_a(), Some(&scenario_b_previous()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.compute(&scenario_a(), Some(&scenario_b_previous())))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn huge_ledger_amounts_still_yield_finite_metrics() {
    let mut entry = StatementEntry::empty(
        CompanyId::parse("acme").unwrap(),
        Period::parse("2024").unwrap(),
    );
    entry.total_revenue = Some(RawAmount::Number(1.0));
    entry.gross_profit = Some(RawAmount::Number(1e307));
    entry.accounts_receivable = Some(RawAmount::Number(1e307));
    entry.current_assets = Some(RawAmount::Number(f64::MAX));
    entry.current_liabilities = Some(RawAmount::Number(-f64::MAX));
    let current = entry.normalize().unwrap();

    let m = MetricsEngine::new().compute(&current, Some(&current));
    assert_all_finite(&m);
    assert_eq!(m.gross_profit_margin, 0.0);
    assert_eq!(m.dso, 0.0);
    assert_eq!(m.ccc, 0.0);
    assert_eq!(m.working_capital, 0.0);
}

#[test]
fn net_margin_change_is_a_point_difference() {
    let current = FinancialRecord {
        total_revenue: 1000.0,
        net_income: 200.0,
        ..FinancialRecord::default()
    };
    let previous = FinancialRecord {
        total_revenue: 1000.0,
        net_income: 100.0,
        ..FinancialRecord::default()
    };
    let m = MetricsEngine::new().compute(&current, Some(&previous));
    let changes = m.changes.expect("comparison should attach a change set");
    assert_close(changes.net_profit_margin_change, 10.0, "net margin change");
    assert_close(m.profit_growth, 100.0, "profit growth");
}
