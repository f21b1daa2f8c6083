//! # Bizboard Pagination
//!
//! A generic pagination engine for list views over data that is already in
//! memory (clients, services, budgets, breakdown rows).
//!
//! The engine is synchronous and owns nothing but the sequence it pages over.
//! Navigation always clamps instead of failing; the only rejected input is a
//! page size of 0.
//!
//! ## Public API
//!
//! - `Paginator`: the engine and its navigation operations.
//! - `PaginationConfig`: initial page size and page.
//! - `PaginationState`: a snapshot of the derived navigation fields.
//! - `PaginationError`: the errors this crate can return.

pub mod error;
pub mod paginator;
pub mod state;

pub use error::PaginationError;
pub use paginator::Paginator;
pub use state::{PaginationConfig, PaginationState, DEFAULT_PAGE_SIZE};
