use analytics::{BreakdownShare, DerivedKpiSet, KpiComparison, MetricDelta};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use core_types::{MetricSeries, RawFinancialMetrics};
use pagination::PaginationState;
use rust_decimal::Decimal;

fn amount(value: Decimal) -> String {
    value.round_dp(2).to_string()
}

fn percent(value: Decimal) -> String {
    format!("{}%", value.round_dp(2))
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Totals from the backend followed by the derived figures.
pub fn kpi_table(metrics: &RawFinancialMetrics, kpis: &DerivedKpiSet) -> Table {
    let mut table = new_table(vec!["Metric", "Value"]);

    let rows = [
        ("Revenue", amount(metrics.revenue_total)),
        ("Taxes", amount(metrics.taxes_total)),
        ("Variable costs", amount(metrics.variable_costs)),
        ("Fixed costs", amount(metrics.fixed_costs)),
        ("Budgets", amount(metrics.total_budgets)),
        ("Net revenue", amount(kpis.net_revenue)),
        ("Gross profit", amount(kpis.gross_profit)),
        ("Net profit", amount(kpis.net_profit)),
        ("Net margin", percent(kpis.net_margin_percent())),
        ("Contribution margin", percent(kpis.contribution_margin_percent)),
        ("Break-even revenue", amount(kpis.break_even_revenue)),
        ("Total cost", amount(kpis.total_cost)),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), right(value)]);
    }

    table
}

pub fn comparison_table(comparison: &KpiComparison) -> Table {
    let mut table = new_table(vec!["Metric", "Current", "Previous", "Change", "Change %"]);

    let mut add = |label: &str, delta: &MetricDelta, format: fn(Decimal) -> String| {
        table.add_row(vec![
            Cell::new(label),
            right(format(delta.current)),
            right(format(delta.previous)),
            right(format(delta.change)),
            right(delta.change_percent.map(percent).unwrap_or_else(|| "n/a".to_string())),
        ]);
    };
    add("Net revenue", &comparison.net_revenue, amount);
    add("Net profit", &comparison.net_profit, amount);
    add("Total cost", &comparison.total_cost, amount);
    add("Contribution margin", &comparison.contribution_margin_percent, percent);

    table.add_row(vec![
        Cell::new("Net margin (pp)"),
        right(String::new()),
        right(String::new()),
        right(comparison.net_margin_points.round_dp(2).to_string()),
        right(String::new()),
    ]);

    table
}

pub fn breakdown_table(series: MetricSeries, rows: &[BreakdownShare]) -> Table {
    let mut table = new_table(vec![series.label_header(), series.value_header(), "Share"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.label),
            right(amount(row.value)),
            right(percent(row.share_percent)),
        ]);
    }
    table
}

/// "Showing 11 to 20 of 25 (page 2 of 3)".
pub fn pagination_footer(state: &PaginationState) -> String {
    if state.total_items == 0 {
        return "No entries".to_string();
    }
    format!(
        "Showing {} to {} of {} (page {} of {})",
        state.start_index, state.end_index, state.total_items, state.current_page, state.total_pages
    )
}
