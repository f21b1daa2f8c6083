//! # Bizboard Analytics
//!
//! This crate derives the secondary financial KPIs a dashboard shows on top of
//! the aggregates computed by the backend.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No knowledge of the backend or of how figures are rendered.
//!   It depends only on `core-types`.
//! - **Stateless Calculation:** The `KpiCalculator` takes a `RawFinancialMetrics`
//!   record and returns a `DerivedKpiSet`. Nothing is cached between calls; the
//!   consumer recomputes on every new fetch.
//!
//! ## Public API
//!
//! - `KpiCalculator` / `calculate_derived_kpis`: the profit cascade and ratios.
//! - `DerivedKpiSet`: the calculated figures.
//! - `compare_periods` / `KpiComparison`: margin deltas between two periods.
//! - `breakdown_shares`: share of total for a breakdown series.

// Declare the modules that constitute this crate.
pub mod breakdown;
pub mod comparison;
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use breakdown::{breakdown_shares, BreakdownShare};
pub use comparison::{compare_periods, KpiComparison, MetricDelta};
pub use engine::{calculate_derived_kpis, KpiCalculator};
pub use report::DerivedKpiSet;
