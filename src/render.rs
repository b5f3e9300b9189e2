use analytics::{HistoryPoint, MetricCategory, MetricSet};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use core_types::{Company, Period};

fn value_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.2}")).set_alignment(CellAlignment::Right)
}

fn new_table<T: Into<comfy_table::Row>>(header: T) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

/// One row per KPI, grouped by category, followed by the comparison block if any.
pub fn metrics_table(metrics: &MetricSet) -> String {
    let mut table = new_table(vec!["Category", "Metric", "Value"]);

    for category in MetricCategory::ALL {
        for (label, value) in metrics.by_category(category) {
            table.add_row(vec![Cell::new(category.label()), Cell::new(label), value_cell(value)]);
        }
    }

    if let Some(changes) = &metrics.changes {
        let rows = [
            ("Revenue change (%)", changes.revenue_change),
            ("Net profit margin change (pts)", changes.net_profit_margin_change),
            ("Operating cash flow change (%)", changes.operating_cash_flow_change),
            ("Return on equity change (pts)", changes.roe_change),
        ];
        for (label, value) in rows {
            table.add_row(vec![Cell::new("Changes"), Cell::new(label), value_cell(value)]);
        }
    }

    table.to_string()
}

/// KPIs down the side, periods across the top.
pub fn history_table(history: &[HistoryPoint]) -> String {
    let mut header = vec!["Metric".to_string()];
    header.extend(history.iter().map(|point| point.period.to_string()));
    let mut table = new_table(header);

    for category in MetricCategory::ALL {
        // Growth needs a comparison period, so it is always zero in a history.
        if category == MetricCategory::Growth {
            continue;
        }
        let columns: Vec<Vec<(&'static str, f64)>> = history
            .iter()
            .map(|point| point.metrics.by_category(category))
            .collect();
        let labels = MetricSet::new().by_category(category);

        for (index, (label, _)) in labels.iter().enumerate() {
            let mut row = vec![Cell::new(*label)];
            row.extend(columns.iter().map(|column| value_cell(column[index].1)));
            table.add_row(row);
        }
    }

    table.to_string()
}

pub fn companies_table(companies: &[Company]) -> String {
    let mut table = new_table(vec!["ID", "Name", "Industry"]);
    for company in companies {
        table.add_row(vec![
            company.id.to_string(),
            company.name.clone(),
            company.industry.clone().unwrap_or_default(),
        ]);
    }
    table.to_string()
}

pub fn periods_table(periods: &[Period]) -> String {
    let mut table = new_table(vec!["Period"]);
    for period in periods {
        table.add_row(vec![period.to_string()]);
    }
    table.to_string()
}
