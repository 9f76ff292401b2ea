//! Page selection and pagination summaries shared by the listing endpoints.

use crate::model::api::PaginationDto;

/// Page size used when the caller does not supply one.
pub const DEFAULT_LIMIT: u64 = 10;
/// Largest page size a caller may request.
pub const MAX_LIMIT: u64 = 100;
/// Largest page number a caller may request. Keeps the row offset within `i64`.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_LIMIT;

/// A normalized page selection.
///
/// Pages are 1-based. Out-of-range values are corrected rather than rejected: the page
/// is clamped to `1..=MAX_PAGE` and the limit to `1..=MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.unwrap_or(1).clamp(1, MAX_PAGE as i64) as u64;
        let limit = limit
            .unwrap_or(DEFAULT_LIMIT as i64)
            .clamp(1, MAX_LIMIT as i64) as u64;

        Self { page, limit }
    }

    /// Builds a page selection from raw query values.
    ///
    /// Values that are not integers fall back to the defaults.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |value: Option<&str>| value.and_then(|v| v.trim().parse::<i64>().ok());

        Self::new(parse(page), parse(limit))
    }

    /// Number of records preceding this page.
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Pagination summary for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Computes the summary for `page` given the total number of matching records.
    pub fn new(page: PageRequest, total: u64) -> Self {
        let total_pages = total.div_ceil(page.limit);

        Self {
            current_page: page.page,
            total_pages,
            total,
            has_next: page.page < total_pages,
            has_prev: page.page > 1,
        }
    }

    pub fn into_dto(self) -> PaginationDto {
        PaginationDto {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_requests: self.total,
            has_next: self.has_next,
            has_prev: self.has_prev,
        }
    }
}
