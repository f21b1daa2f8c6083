use crate::responses::{RawMetricsPayload, SeriesEntryPayload};
use core_types::{DateRange, LabeledValue, RawFinancialMetrics};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Turns a raw RPC payload into a total `RawFinancialMetrics` record.
///
/// Applied once, immediately after every fetch, so that nothing downstream has
/// to deal with absent values: missing, `null` or non-numeric totals become 0,
/// missing series become empty. The record is keyed by the range that was
/// requested, not by anything the backend echoes back.
pub fn normalize_metrics(payload: RawMetricsPayload, date_range: Option<DateRange>) -> RawFinancialMetrics {
    RawFinancialMetrics {
        revenue_total: decimal_or_zero("revenue_total", &payload.revenue_total),
        taxes_total: decimal_or_zero("taxes_total", &payload.taxes_total),
        variable_costs: decimal_or_zero("variable_costs", &payload.variable_costs),
        fixed_costs: decimal_or_zero("fixed_costs", &payload.fixed_costs),
        total_budgets: decimal_or_zero("total_budgets", &payload.total_budgets),
        profit_by_client: normalize_series("profit_by_client", payload.profit_by_client),
        margin_by_service: normalize_series("margin_by_service", payload.margin_by_service),
        cost_by_category: normalize_series("cost_by_category", payload.cost_by_category),
        date_range,
    }
}

fn normalize_series(field: &str, entries: Option<Vec<SeriesEntryPayload>>) -> Vec<LabeledValue> {
    entries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| LabeledValue {
            label: entry.label.unwrap_or_default(),
            value: decimal_or_zero(field, &entry.value),
        })
        .collect()
}

/// Reads a JSON number or numeric string as a `Decimal`, falling back to 0.
///
/// Numbers outside the `Decimal` range (about ±7.9e28) also fall back to 0.
fn decimal_or_zero(field: &str, value: &Value) -> Decimal {
    let parsed = match value {
        Value::Null => return Decimal::ZERO,
        Value::Number(number) => parse_number(&number.to_string()).or_else(|| number.as_f64().and_then(Decimal::from_f64)),
        Value::String(text) => parse_number(text.trim()),
        _ => None,
    };

    parsed.unwrap_or_else(|| {
        tracing::warn!(field, value = %value, "Non-numeric or out-of-range metric value treated as zero.");
        Decimal::ZERO
    })
}

fn parse_number(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn payload(value: Value) -> RawMetricsPayload {
        RawMetricsPayload::from_value(value).unwrap()
    }

    #[test]
    fn test_complete_payload() {
        let metrics = normalize_metrics(
            payload(json!({
                "revenue_total": 2000,
                "taxes_total": 200.5,
                "variable_costs": "900",
                "fixed_costs": 400,
                "total_budgets": 12,
                "margin_by_service": [
                    { "label": "Consulting", "value": 55.5 },
                    { "label": "Support", "value": 20 }
                ]
            })),
            None,
        );

        assert_eq!(metrics.revenue_total, dec!(2000));
        assert_eq!(metrics.taxes_total, dec!(200.5));
        assert_eq!(metrics.variable_costs, dec!(900));
        assert_eq!(metrics.fixed_costs, dec!(400));
        assert_eq!(metrics.total_budgets, dec!(12));
        assert_eq!(
            metrics.margin_by_service,
            vec![
                LabeledValue::new("Consulting", dec!(55.5)),
                LabeledValue::new("Support", dec!(20)),
            ]
        );
    }

    #[test]
    fn test_missing_and_null_fields_become_zero_and_empty() {
        let metrics = normalize_metrics(
            payload(json!({ "revenue_total": null, "profit_by_client": null })),
            None,
        );

        assert_eq!(metrics, RawFinancialMetrics::empty(None));
    }

    #[test]
    fn test_non_numeric_values_become_zero() {
        let metrics = normalize_metrics(
            payload(json!({
                "revenue_total": "n/a",
                "taxes_total": true,
                "fixed_costs": { "amount": 5 },
                "cost_by_category": [{ "value": "abc" }]
            })),
            None,
        );

        assert_eq!(metrics.revenue_total, Decimal::ZERO);
        assert_eq!(metrics.taxes_total, Decimal::ZERO);
        assert_eq!(metrics.fixed_costs, Decimal::ZERO);
        assert_eq!(metrics.cost_by_category, vec![LabeledValue::new("", Decimal::ZERO)]);
    }

    #[test]
    fn test_scientific_notation_is_parsed() {
        let metrics = normalize_metrics(payload(json!({ "revenue_total": "1.5e3" })), None);
        assert_eq!(metrics.revenue_total, dec!(1500));
    }

    #[test]
    fn test_out_of_range_values_become_zero() {
        let metrics = normalize_metrics(
            payload(json!({ "revenue_total": 1e40, "taxes_total": "1e40", "fixed_costs": "-1e40" })),
            None,
        );

        assert_eq!(metrics.revenue_total, Decimal::ZERO);
        assert_eq!(metrics.taxes_total, Decimal::ZERO);
        assert_eq!(metrics.fixed_costs, Decimal::ZERO);
    }

    #[test]
    fn test_record_is_keyed_by_requested_range() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        )
        .unwrap();

        let metrics = normalize_metrics(RawMetricsPayload::default(), Some(range));
        assert_eq!(metrics.date_range, Some(range));
    }
}
