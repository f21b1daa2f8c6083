use crate::report::{checked_percent, DerivedKpiSet};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How one figure moved between two periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDelta {
    pub current: Decimal,
    pub previous: Decimal,
    pub change: Decimal,
    /// `None` unless the previous value is strictly positive and the percentage
    /// fits a `Decimal`.
    pub change_percent: Option<Decimal>,
}

impl MetricDelta {
    pub fn between(current: Decimal, previous: Decimal) -> Self {
        let change = current.saturating_sub(previous);
        let change_percent = if previous > Decimal::ZERO {
            checked_percent(change, previous)
        } else {
            None
        };

        Self {
            current,
            previous,
            change,
            change_percent,
        }
    }

    pub fn is_improvement(&self) -> bool {
        self.change > Decimal::ZERO
    }
}

/// Period-over-period movement of the headline KPIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiComparison {
    pub net_revenue: MetricDelta,
    pub net_profit: MetricDelta,
    pub total_cost: MetricDelta,
    pub contribution_margin_percent: MetricDelta,
    /// Movement of the net margin, in percentage points.
    pub net_margin_points: Decimal,
}

/// Compares the KPIs of the current period against a previous one.
pub fn compare_periods(current: &DerivedKpiSet, previous: &DerivedKpiSet) -> KpiComparison {
    KpiComparison {
        net_revenue: MetricDelta::between(current.net_revenue, previous.net_revenue),
        net_profit: MetricDelta::between(current.net_profit, previous.net_profit),
        total_cost: MetricDelta::between(current.total_cost, previous.total_cost),
        contribution_margin_percent: MetricDelta::between(
            current.contribution_margin_percent,
            previous.contribution_margin_percent,
        ),
        net_margin_points: current.net_margin_percent().saturating_sub(previous.net_margin_percent()),
    }
}
