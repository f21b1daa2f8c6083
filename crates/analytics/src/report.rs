use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The secondary financial figures derived from one `RawFinancialMetrics` record.
///
/// This struct is the output of the `KpiCalculator`. It has no lifecycle of its
/// own: it is recomputed from the latest fetch every time it is needed and is
/// never cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedKpiSet {
    // I. Profit cascade
    pub net_revenue: Decimal,
    pub gross_profit: Decimal,
    pub net_profit: Decimal,

    // II. Ratios
    pub contribution_margin_percent: Decimal,
    pub break_even_revenue: Decimal,

    // III. Costs
    pub total_cost: Decimal,
}

impl DerivedKpiSet {
    /// Creates a zeroed-out set, the result for a record with no activity.
    pub fn new() -> Self {
        Self {
            net_revenue: Decimal::ZERO,
            gross_profit: Decimal::ZERO,
            net_profit: Decimal::ZERO,
            contribution_margin_percent: Decimal::ZERO,
            break_even_revenue: Decimal::ZERO,
            total_cost: Decimal::ZERO,
        }
    }

    /// Net profit as a percentage of net revenue, 0 unless net revenue is positive.
    pub fn net_margin_percent(&self) -> Decimal {
        if self.net_revenue > Decimal::ZERO {
            checked_percent(self.net_profit, self.net_revenue).unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        }
    }

    /// Whether net revenue already covers the break-even level.
    ///
    /// A zero break-even revenue means the ratio was undefined, which never counts
    /// as covered.
    pub fn is_above_break_even(&self) -> bool {
        self.break_even_revenue > Decimal::ZERO && self.net_revenue >= self.break_even_revenue
    }
}

impl Default for DerivedKpiSet {
    fn default() -> Self {
        Self::new()
    }
}

/// `part / whole * 100`, or `None` when the quotient is out of `Decimal` range
/// or `whole` is zero.
pub(crate) fn checked_percent(part: Decimal, whole: Decimal) -> Option<Decimal> {
    part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)
}
