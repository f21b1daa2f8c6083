use crate::error::ApiError;
use serde::Deserialize;
use serde_json::Value;

// Totals are kept as raw JSON values here; turning them into numbers is the job
// of `normalize_metrics`. Aliases accept camelCase keys as well.

/// The body returned by the financial metrics procedure, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMetricsPayload {
    #[serde(default, alias = "revenueTotal")]
    pub revenue_total: Value,
    #[serde(default, alias = "taxesTotal")]
    pub taxes_total: Value,
    #[serde(default, alias = "variableCosts")]
    pub variable_costs: Value,
    #[serde(default, alias = "fixedCosts")]
    pub fixed_costs: Value,
    #[serde(default, alias = "totalBudgets")]
    pub total_budgets: Value,

    #[serde(default, alias = "profitByClient")]
    pub profit_by_client: Option<Vec<SeriesEntryPayload>>,
    #[serde(default, alias = "marginByService")]
    pub margin_by_service: Option<Vec<SeriesEntryPayload>>,
    #[serde(default, alias = "costByCategory")]
    pub cost_by_category: Option<Vec<SeriesEntryPayload>>,
}

/// One `(label, value)` point of a breakdown series.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeriesEntryPayload {
    #[serde(default, alias = "name")]
    pub label: Option<String>,
    #[serde(default)]
    pub value: Value,
}

impl RawMetricsPayload {
    /// Reads the payload out of an RPC response body.
    ///
    /// Set-returning procedures answer with an array of rows, in which case the
    /// first row is used. An empty array or `null` yields an empty payload.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Array(rows) => match rows.into_iter().next() {
                Some(row) => Self::from_value(row),
                None => Ok(Self::default()),
            },
            other => serde_json::from_value(other).map_err(|e| ApiError::Deserialization(e.to_string())),
        }
    }
}

/// Error body returned by the backend's REST layer.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorResponse {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl RpcErrorResponse {
    /// Single-line rendering with the code and details when present.
    pub fn describe(&self) -> String {
        let mut text = match &self.code {
            Some(code) => format!("[{}] {}", code, self.message),
            None => self.message.clone(),
        };
        if let Some(details) = &self.details {
            text.push_str(&format!(" ({})", details));
        }
        if let Some(hint) = &self.hint {
            text.push_str(&format!(" hint: {}", hint));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_from_object_with_missing_fields() {
        let payload = RawMetricsPayload::from_value(json!({
            "revenue_total": 1200.5,
            "profit_by_client": [{ "label": "Acme", "value": 300 }]
        }))
        .unwrap();

        assert_eq!(payload.revenue_total, json!(1200.5));
        assert_eq!(payload.taxes_total, Value::Null);
        assert_eq!(payload.profit_by_client.map(|s| s.len()), Some(1));
        assert!(payload.cost_by_category.is_none());
    }

    #[test]
    fn test_payload_accepts_camel_case_and_name_alias() {
        let payload = RawMetricsPayload::from_value(json!({
            "revenueTotal": "900",
            "costByCategory": [{ "name": "Rent", "value": "150.00" }]
        }))
        .unwrap();

        assert_eq!(payload.revenue_total, json!("900"));
        let costs = payload.cost_by_category.unwrap();
        assert_eq!(costs[0].label.as_deref(), Some("Rent"));
    }

    #[test]
    fn test_payload_from_row_array_takes_first_row() {
        let payload = RawMetricsPayload::from_value(json!([
            { "fixed_costs": 400 },
            { "fixed_costs": 999 }
        ]))
        .unwrap();
        assert_eq!(payload.fixed_costs, json!(400));

        let empty = RawMetricsPayload::from_value(json!([])).unwrap();
        assert_eq!(empty.fixed_costs, Value::Null);
    }

    #[test]
    fn test_payload_rejects_scalar_body() {
        let err = RawMetricsPayload::from_value(json!("oops")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn test_error_response_description() {
        let err: RpcErrorResponse = serde_json::from_value(json!({
            "message": "function get_financial_metrics(date, date) does not exist",
            "code": "PGRST202",
            "hint": "Check the parameter names"
        }))
        .unwrap();

        assert_eq!(
            err.describe(),
            "[PGRST202] function get_financial_metrics(date, date) does not exist hint: Check the parameter names"
        );
    }
}
