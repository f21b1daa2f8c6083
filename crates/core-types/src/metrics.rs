use crate::error::CoreError;
use crate::period::DateRange;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single point of a breakdown series, e.g. the profit attributed to one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: Decimal,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// The three ordered breakdowns the backend returns alongside the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricSeries {
    ProfitByClient,
    MarginByService,
    CostByCategory,
}

impl MetricSeries {
    /// Human readable column header for the series' label.
    pub fn label_header(&self) -> &'static str {
        match self {
            MetricSeries::ProfitByClient => "Client",
            MetricSeries::MarginByService => "Service",
            MetricSeries::CostByCategory => "Category",
        }
    }

    /// Human readable column header for the series' value.
    pub fn value_header(&self) -> &'static str {
        match self {
            MetricSeries::ProfitByClient => "Profit",
            MetricSeries::MarginByService => "Margin",
            MetricSeries::CostByCategory => "Cost",
        }
    }

    pub fn all() -> &'static [MetricSeries] {
        &[
            MetricSeries::ProfitByClient,
            MetricSeries::MarginByService,
            MetricSeries::CostByCategory,
        ]
    }
}

impl FromStr for MetricSeries {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clients" | "profit_by_client" => Ok(MetricSeries::ProfitByClient),
            "services" | "margin_by_service" => Ok(MetricSeries::MarginByService),
            "categories" | "cost_by_category" => Ok(MetricSeries::CostByCategory),
            other => Err(CoreError::UnknownSeries(other.to_string())),
        }
    }
}

/// The financial aggregate for one period, as produced by the backend's
/// aggregation procedure.
///
/// All numeric fields are total: absent values have already been replaced with
/// zero and absent series with empty vectors by the fetch layer. The client
/// never mutates a record; a new one is produced by every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawFinancialMetrics {
    pub revenue_total: Decimal,
    pub taxes_total: Decimal,
    pub variable_costs: Decimal,
    pub fixed_costs: Decimal,
    pub total_budgets: Decimal,

    pub profit_by_client: Vec<LabeledValue>,
    pub margin_by_service: Vec<LabeledValue>,
    pub cost_by_category: Vec<LabeledValue>,

    /// `None` when the query was not restricted to a period.
    pub date_range: Option<DateRange>,
}

impl RawFinancialMetrics {
    /// A zeroed record for the given query key.
    pub fn empty(date_range: Option<DateRange>) -> Self {
        Self {
            date_range,
            ..Self::default()
        }
    }

    pub fn series(&self, series: MetricSeries) -> &[LabeledValue] {
        match series {
            MetricSeries::ProfitByClient => &self.profit_by_client,
            MetricSeries::MarginByService => &self.margin_by_service,
            MetricSeries::CostByCategory => &self.cost_by_category,
        }
    }
}
