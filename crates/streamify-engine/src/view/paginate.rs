use serde::Serialize;
use std::ops::Range;

/// Page metadata after clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total_matching: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl Pagination {
    /// Half-open index range of the current page within the matching rows
    pub fn range(&self) -> Range<usize> {
        let start = (self.page - 1)
            .saturating_mul(self.page_size)
            .min(self.total_matching);
        let end = start.saturating_add(self.page_size).min(self.total_matching);
        start..end
    }
}

/// Compute page count and clamp the requested page into `[1, max(total_pages, 1)]`.
///
/// A zero page size is treated as one row per page.
pub fn paginate(total_matching: usize, requested_page: i64, page_size: usize) -> Pagination {
    let page_size = page_size.max(1);
    let total_pages = total_matching.div_ceil(page_size);
    let last_page = total_pages.max(1);

    let page = if requested_page < 1 {
        1
    } else {
        usize::try_from(requested_page)
            .unwrap_or(usize::MAX)
            .min(last_page)
    };

    if i64::try_from(page).ok() != Some(requested_page) {
        tracing::debug!(
            requested = requested_page,
            clamped = page,
            total_pages,
            "page out of range, clamped"
        );
    }

    Pagination {
        total_matching,
        total_pages,
        page,
        page_size,
    }
}
