//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Resolved pagination parameters (1-indexed page, page size of at least 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: u32,

    /// Number of items per page
    pub page_size: u32,
}

impl Pagination {
    /// Resolve raw request values: a page below 1 becomes 1, a page size
    /// below 1 becomes `default_page_size`
    pub fn resolve(page: i64, page_size: i64, default_page_size: u32) -> Self {
        let page = if page < 1 { 1 } else { page.min(u32::MAX as i64) as u32 };
        let page_size = if page_size < 1 {
            default_page_size.max(1)
        } else {
            page_size.min(u32::MAX as i64) as u32
        };

        Self { page, page_size }
    }

    /// Calculate the offset for database queries: `(page - 1) * page_size`
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Get the limit for database queries
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }

    /// `ceil(total / page_size)`, zero when there is nothing to page
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.page_size))
    }
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The items on this page
    pub items: Vec<T>,

    /// Total number of items across all pages
    pub total_count: u64,

    /// Current page number
    pub page: u32,

    /// Items per page
    pub page_size: u32,

    /// Total number of pages
    pub total_pages: u64,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(items: Vec<T>, pagination: Pagination, total_count: u64) -> Self {
        Self {
            items,
            total_count,
            page: pagination.page,
            page_size: pagination.page_size,
            total_pages: pagination.total_pages(total_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_applies_defaults() {
        assert_eq!(Pagination::resolve(0, 0, 8), Pagination { page: 1, page_size: 8 });
        assert_eq!(Pagination::resolve(-3, -1, 6), Pagination { page: 1, page_size: 6 });
        assert_eq!(Pagination::resolve(3, 20, 8), Pagination { page: 3, page_size: 20 });
    }

    #[test]
    fn test_offset_and_limit() {
        let pagination = Pagination::resolve(3, 8, 8);
        assert_eq!(pagination.offset(), 16);
        assert_eq!(pagination.limit(), 8);
        assert_eq!(Pagination::resolve(1, 5, 8).offset(), 0);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let pagination = Pagination::resolve(1, 8, 8);
        assert_eq!(pagination.total_pages(0), 0);
        assert_eq!(pagination.total_pages(1), 1);
        assert_eq!(pagination.total_pages(8), 1);
        assert_eq!(pagination.total_pages(9), 2);
        assert_eq!(pagination.total_pages(17), 3);
    }

    #[test]
    fn test_paginated_response_metadata() {
        let page = PaginatedResponse::new(vec![1, 2, 3], Pagination::resolve(1, 3, 8), 7);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_count, 7);
        assert_eq!(page.page_size, 3);
        assert_eq!(page.total_pages, 3);
    }
}
