use crate::error::ApiError;
use crate::normalize::normalize_metrics;
use crate::MetricsSource;
use core_types::{DateRange, RawFinancialMetrics};
use std::time::Instant;

/// Fetches one financial aggregate per query and normalizes it.
///
/// Every call is an independent snapshot: there is no retry, no backoff and no
/// last-known-good value. A failed fetch is returned to the caller exactly as
/// the source reported it.
pub struct MetricsFetcher<S> {
    source: S,
}

impl<S: MetricsSource> MetricsFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn fetch(&self, date_range: Option<DateRange>) -> Result<RawFinancialMetrics, ApiError> {
        let start = Instant::now();

        let payload = match self.source.fetch_financial_metrics(date_range.as_ref()).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, range = ?date_range, "Financial metrics fetch failed.");
                return Err(e);
            }
        };
        let metrics = normalize_metrics(payload, date_range);

        tracing::info!(
            range = ?date_range,
            elapsed_ms = start.elapsed().as_millis() as u64,
            clients = metrics.profit_by_client.len(),
            services = metrics.margin_by_service.len(),
            categories = metrics.cost_by_category.len(),
            "Fetched financial metrics."
        );
        Ok(metrics)
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
