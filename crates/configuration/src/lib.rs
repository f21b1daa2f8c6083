use crate::error::ConfigError;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{BackendSettings, LoggingSettings, PaginationSettings, Settings};

/// Loads the application settings from various sources.
///
/// This function orchestrates the layered configuration loading:
/// 1. Reads from a default `config/base.toml` file.
/// 2. Merges settings from an environment-specific file (e.g., `config/production.toml`).
/// 3. Merges settings from environment variables (e.g., `APP__BACKEND__API_KEY=...`).
pub fn load_settings() -> Result<Settings, ConfigError> {
    // Get the current environment. Default to "development" if not set.
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

    let builder = config::Config::builder()
        .add_source(File::with_name("config/base").required(false))
        .add_source(File::with_name(&format!("config/{}", environment)).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        );

    build_settings(builder)
}

/// Parses settings from an in-memory TOML document. Used by tests and tools
/// that carry their configuration inline.
pub fn settings_from_toml(toml: &str) -> Result<Settings, ConfigError> {
    let builder =
        config::Config::builder().add_source(File::from_str(toml, config::FileFormat::Toml));
    build_settings(builder)
}

fn build_settings(builder: ConfigBuilder<DefaultState>) -> Result<Settings, ConfigError> {
    let settings = builder.build()?.try_deserialize::<Settings>()?;
    validate(&settings)?;
    Ok(settings)
}

/// Rejects settings that would only fail later, at request time.
fn validate(settings: &Settings) -> Result<(), ConfigError> {
    let backend = &settings.backend;

    if !(backend.base_url.starts_with("http://") || backend.base_url.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "backend.base_url must be an http(s) URL, got '{}'",
            backend.base_url
        )));
    }
    if backend.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError("backend.api_key must be set".to_string()));
    }
    if backend.metrics_function.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "backend.metrics_function must not be empty".to_string(),
        ));
    }
    if backend.timeout.is_zero() {
        return Err(ConfigError::ValidationError("backend.timeout must be positive".to_string()));
    }
    if settings.pagination.default_page_size == 0 {
        return Err(ConfigError::ValidationError(
            "pagination.default_page_size must be at least 1".to_string(),
        ));
    }

    Ok(())
}
