use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub backend: BackendSettings,
    #[serde(default)]
    pub pagination: PaginationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Connection details for the managed backend that serves the aggregates.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    /// Project URL of the backend, e.g. "https://xyz.example.co".
    pub base_url: String,
    /// Anonymous or service key sent as `apikey` and as the bearer token.
    pub api_key: String,
    /// Name of the stored procedure that returns the financial aggregate.
    #[serde(default = "default_metrics_function")]
    pub metrics_function: String,
    /// Request timeout for every RPC call.
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

/// Defaults for list views.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationSettings {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set (e.g. "info", "api_client=debug").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

// --- Default Implementations ---
// These allow the `[pagination]` and `[logging]` sections to be omitted.

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}

fn default_metrics_function() -> String {
    "get_financial_metrics".to_string()
}
fn default_timeout() -> Duration {
    Duration::from_secs(30)
}
fn default_page_size() -> usize {
    10
}
fn default_log_level() -> String {
    "info".to_string()
}
