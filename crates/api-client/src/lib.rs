use crate::error::ApiError;
use async_trait::async_trait;
use core_types::DateRange;

pub mod error;
pub mod fetcher;
pub mod normalize;
pub mod responses;
pub mod rpc_client;
// --- Public API ---
pub use fetcher::MetricsFetcher;
pub use normalize::normalize_metrics;
pub use responses::{RawMetricsPayload, RpcErrorResponse, SeriesEntryPayload};
pub use rpc_client::{MetricsParams, RpcClient};

/// The abstract interface to whatever serves the pre-aggregated financial
/// metrics. The fetcher only depends on this trait, so the backend client can
/// be swapped for an in-memory source in tests.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Runs the aggregation for the given period, or for all time when `None`.
    async fn fetch_financial_metrics(&self, range: Option<&DateRange>) -> Result<RawMetricsPayload, ApiError>;
}
