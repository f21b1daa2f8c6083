use crate::report::{checked_percent, DerivedKpiSet};
use core_types::RawFinancialMetrics;
use rust_decimal::Decimal;

/// A stateless calculator for deriving secondary KPIs from a raw metrics record.
#[derive(Debug, Default, Clone, Copy)]
pub struct KpiCalculator {}

impl KpiCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the full KPI set from one metrics record.
    ///
    /// This is a total function: every input produces a result. The two ratios
    /// are guarded by a strict positivity check on their denominator, so a zero
    /// net revenue and a negative one both yield a 0 margin, and a zero or
    /// negative margin yields a 0 break-even revenue. A ratio whose quotient does
    /// not fit a `Decimal` falls back to 0 the same way, and the cascade
    /// saturates at the `Decimal` bounds.
    pub fn calculate(&self, metrics: &RawFinancialMetrics) -> DerivedKpiSet {
        let mut kpis = DerivedKpiSet::new();

        self.calculate_profit_cascade(metrics, &mut kpis);
        self.calculate_ratios(metrics, &mut kpis);
        kpis.total_cost = metrics.variable_costs.saturating_add(metrics.fixed_costs);

        kpis
    }

    /// Revenue net of taxes, then of variable costs, then of fixed costs.
    fn calculate_profit_cascade(&self, metrics: &RawFinancialMetrics, kpis: &mut DerivedKpiSet) {
        kpis.net_revenue = metrics.revenue_total.saturating_sub(metrics.taxes_total);
        kpis.gross_profit = kpis.net_revenue.saturating_sub(metrics.variable_costs);
        kpis.net_profit = kpis.gross_profit.saturating_sub(metrics.fixed_costs);
    }

    /// Contribution margin and the break-even revenue that depends on it.
    fn calculate_ratios(&self, metrics: &RawFinancialMetrics, kpis: &mut DerivedKpiSet) {
        if kpis.net_revenue > Decimal::ZERO {
            kpis.contribution_margin_percent =
                checked_percent(kpis.gross_profit, kpis.net_revenue).unwrap_or(Decimal::ZERO);
        }

        if kpis.contribution_margin_percent > Decimal::ZERO {
            kpis.break_even_revenue = kpis
                .contribution_margin_percent
                .checked_div(Decimal::ONE_HUNDRED)
                .and_then(|margin| metrics.fixed_costs.checked_div(margin))
                .unwrap_or(Decimal::ZERO);
        }
    }
}

/// Convenience wrapper around `KpiCalculator::calculate`.
pub fn calculate_derived_kpis(metrics: &RawFinancialMetrics) -> DerivedKpiSet {
    KpiCalculator::new().calculate(metrics)
}
