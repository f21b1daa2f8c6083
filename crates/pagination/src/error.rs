use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Page size must be at least 1, got {0}")]
    InvalidPageSize(usize),

    #[error("Initial page must be at least 1, got {0}")]
    InvalidInitialPage(i64),
}
