//! # Bizboard Core Types
//!
//! The shared vocabulary of the workspace. Every other crate speaks in terms of
//! the structs defined here, so this crate has no knowledge of the backend, the
//! calculator or the pagination engine.
//!
//! ## Public API
//!
//! - `RawFinancialMetrics`: the normalized aggregate returned by the backend.
//! - `LabeledValue`: a single `(label, value)` point of a breakdown series.
//! - `MetricSeries`: names the three breakdown series carried by a metrics record.
//! - `DateRange`: the inclusive period a metrics query is keyed by.
//! - `CoreError`: the error type for invalid inputs to these types.

pub mod error;
pub mod metrics;
pub mod period;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use metrics::{LabeledValue, MetricSeries, RawFinancialMetrics};
pub use period::DateRange;
