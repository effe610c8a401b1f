//! Shared pagination utilities
//!
//! `page` and `limit` arrive as raw query strings so that empty and
//! non-numeric values are reported the same way as out-of-range ones.
//!
//! # Examples
//!
//! ```rust,ignore
//! use breeds_server::features::shared::pagination::{PageRequest, Pagination};
//!
//! let request = PageRequest::parse(Some("2"), Some("20"))?;
//! assert_eq!(request.offset(), 20);
//!
//! let pagination = Pagination::new(request, 45);
//! assert_eq!(pagination.total_pages, 3);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid pagination parameters. Page must be >= 1, limit must be 1-100")]
pub struct InvalidPagination;

/// Validated page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Parse raw `page`/`limit` values; absent values take the defaults.
    ///
    /// Present values must be plain integers, `page >= 1` and
    /// `1 <= limit <= 100`.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Result<Self, InvalidPagination> {
        let page = match page {
            Some(raw) => parse_int(raw).filter(|p| *p >= 1).ok_or(InvalidPagination)?,
            None => DEFAULT_PAGE,
        };

        let limit = match limit {
            Some(raw) => parse_int(raw)
                .filter(|l| (1..=MAX_LIMIT).contains(l))
                .ok_or(InvalidPagination)?,
            None => DEFAULT_LIMIT,
        };

        Ok(Self { page, limit })
    }

    /// Calculate the offset for SQL OFFSET clause
    ///
    /// Saturates at `i64::MAX` for huge pages, which still selects nothing.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Pagination block of a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(request: PageRequest, total: i64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages: (total + request.limit - 1) / request.limit,
        }
    }
}
