use crate::error::PaginationError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Starting point of a `Paginator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub initial_page_size: usize,
    #[serde(default = "default_page")]
    pub initial_page: i64,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_page() -> i64 {
    1
}

impl PaginationConfig {
    pub fn new(initial_page_size: usize, initial_page: i64) -> Self {
        Self {
            initial_page_size,
            initial_page,
        }
    }

    pub fn with_page_size(initial_page_size: usize) -> Self {
        Self {
            initial_page_size,
            ..Self::default()
        }
    }

    /// A page size of 0 and a page below 1 are both rejected.
    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.initial_page_size == 0 {
            return Err(PaginationError::InvalidPageSize(self.initial_page_size));
        }
        if self.initial_page < 1 {
            return Err(PaginationError::InvalidInitialPage(self.initial_page));
        }
        Ok(())
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            initial_page_size: default_page_size(),
            initial_page: default_page(),
        }
    }
}

/// A read-only snapshot of everything a pager control needs to render.
///
/// `start_index` is 1-based and `end_index` is the count of items up to and
/// including the last one shown, so a view reads "Showing 11 to 20 of 25".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}
