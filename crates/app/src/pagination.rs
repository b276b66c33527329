//! Page-based pagination shared by every list operation.

use thiserror::Error;

/// Page size used when the caller leaves `limit` unset.
pub const DEFAULT_LIMIT: i32 = 10;

/// Largest page size a caller may request; bigger values are clamped.
pub const MAX_LIMIT: i32 = 100;

/// Rejected pagination input.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page must not be negative (got {0})")]
    NegativePage(i32),

    #[error("limit must not be negative (got {0})")]
    NegativeLimit(i32),
}

/// A validated, 1-indexed page request.
///
/// `0` means "unset" for both fields: page `0` reads as the first page and
/// limit `0` as [`DEFAULT_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i32,
    limit: i32,
}

impl Pagination {
    /// Validate and normalise a raw page request.
    ///
    /// # Errors
    ///
    /// Returns an error when `page` or `limit` is negative.
    pub fn new(page: i32, limit: i32) -> Result<Self, PaginationError> {
        if page < 0 {
            return Err(PaginationError::NegativePage(page));
        }

        if limit < 0 {
            return Err(PaginationError::NegativeLimit(limit));
        }

        Ok(Self {
            page: page.max(1),
            limit: match limit {
                0 => DEFAULT_LIMIT,
                limit => limit.min(MAX_LIMIT),
            },
        })
    }

    #[must_use]
    pub const fn page(self) -> i32 {
        self.page
    }

    #[must_use]
    pub const fn limit(self) -> i32 {
        self.limit
    }

    /// Number of rows to skip before this page.
    #[must_use]
    pub fn offset(self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// One page of records plus the row count of the whole table.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}
