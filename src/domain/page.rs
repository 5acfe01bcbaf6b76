//! Pagination over the merged catalog.

use serde::Serialize;

/// Largest page a caller may request; also the fallback for invalid limits.
pub const MAX_PAGE_LIMIT: usize = 100;

/// A validated page request.
///
/// Pages are 1-based. A page below 1 is clamped to 1; a limit below 1 or
/// above [`MAX_PAGE_LIMIT`] falls back to [`MAX_PAGE_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

impl PageRequest {
    #[must_use]
    pub fn new(page: i64, limit: i64) -> Self {
        let page = usize::try_from(page).ok().filter(|p| *p >= 1).unwrap_or(1);
        let limit = usize::try_from(limit)
            .ok()
            .filter(|l| (1..=MAX_PAGE_LIMIT).contains(l))
            .unwrap_or(MAX_PAGE_LIMIT);
        Self { page, limit }
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: MAX_PAGE_LIMIT,
        }
    }
}

/// One page of a larger list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T: Clone> Page<T> {
    /// Cut the requested window out of `all`. Pages past the end are empty.
    #[must_use]
    pub fn slice(all: &[T], request: PageRequest) -> Self {
        let total = all.len();
        let start = request.offset().min(total);
        let end = start.saturating_add(request.limit()).min(total);

        Self {
            items: all[start..end].to_vec(),
            page: request.page(),
            limit: request.limit(),
            total,
            total_pages: total.div_ceil(request.limit()),
        }
    }
}
