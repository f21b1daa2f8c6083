use crate::error::ApiError;
use crate::responses::{RawMetricsPayload, RpcErrorResponse};
use crate::MetricsSource;
use async_trait::async_trait;
use chrono::NaiveDate;
use configuration::BackendSettings;
use core_types::DateRange;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Parameters of the financial metrics procedure. Both bounds are sent, as
/// `null` when the query is not restricted to a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl From<Option<&DateRange>> for MetricsParams {
    fn from(range: Option<&DateRange>) -> Self {
        Self {
            start_date: range.map(|r| r.start_date),
            end_date: range.map(|r| r.end_date),
        }
    }
}

/// A `MetricsSource` that calls stored procedures over the backend's REST
/// RPC endpoint (`POST {base_url}/rest/v1/rpc/{function}`).
#[derive(Clone)]
pub struct RpcClient {
    client: reqwest::Client,
    base_url: String,
    metrics_function: String,
}

impl RpcClient {
    pub fn new(settings: &BackendSettings) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&settings.api_key)
                .map_err(|e| ApiError::Configuration(format!("invalid API key header: {}", e)))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", settings.api_key))
                .map_err(|e| ApiError::Configuration(format!("invalid authorization header: {}", e)))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            metrics_function: settings.metrics_function.clone(),
        })
    }

    pub fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.base_url, function)
    }

    /// Invokes a stored procedure by name and deserializes its JSON result.
    pub async fn call<P, T>(&self, function: &str, params: &P) -> Result<T, ApiError>
    where
        P: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.rpc_url(function);
        tracing::debug!(%url, "Calling remote procedure.");

        let response = self.client.post(&url).json(params).send().await?;
        let status = response.status();
        let text = response.text().await?;

        parse_rpc_response(status, &text)
    }
}

/// Maps an RPC response to either its deserialized body or an `ApiError`
/// carrying the backend's own message.
pub(crate) fn parse_rpc_response<T: DeserializeOwned>(status: StatusCode, text: &str) -> Result<T, ApiError> {
    if status.is_success() {
        return serde_json::from_str::<T>(text).map_err(|e| ApiError::Deserialization(e.to_string()));
    }

    let message = match serde_json::from_str::<RpcErrorResponse>(text) {
        Ok(body) => body.describe(),
        Err(_) if text.trim().is_empty() => status.canonical_reason().unwrap_or("unknown error").to_string(),
        Err(_) => text.trim().to_string(),
    };
    Err(ApiError::Remote {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl MetricsSource for RpcClient {
    async fn fetch_financial_metrics(&self, range: Option<&DateRange>) -> Result<RawMetricsPayload, ApiError> {
        let params = MetricsParams::from(range);
        let body: Value = self.call(&self.metrics_function, &params).await?;
        RawMetricsPayload::from_value(body)
    }
}
