use crate::report::checked_percent;
use core_types::LabeledValue;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A breakdown entry together with its share of the series total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownShare {
    pub label: String,
    pub value: Decimal,
    pub share_percent: Decimal,
}

/// Computes each entry's share of the sum of the positive values.
///
/// Negative entries (e.g. a loss-making client) keep their place and get a
/// negative share, and input order is preserved. When the positive total is not
/// strictly positive every share is 0, as is any share too large for a `Decimal`.
pub fn breakdown_shares(series: &[LabeledValue]) -> Vec<BreakdownShare> {
    let positive_total = series
        .iter()
        .map(|entry| entry.value)
        .filter(|value| value.is_sign_positive())
        .fold(Decimal::ZERO, Decimal::saturating_add);

    series
        .iter()
        .map(|entry| {
            let share_percent = if positive_total > Decimal::ZERO {
                checked_percent(entry.value, positive_total).unwrap_or(Decimal::ZERO)
            } else {
                Decimal::ZERO
            };
            BreakdownShare {
                label: entry.label.clone(),
                value: entry.value,
                share_percent,
            }
        })
        .collect()
}
