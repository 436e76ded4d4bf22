use serde::Serialize;
use streamify_types::StreamRecord;

use super::Pagination;

/// Why a view has no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// Nothing to show and no search is active
    NoData,
    /// A search is active and nothing matched it
    NoMatches,
}

/// 1-based positions of the first and last visible row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowRange {
    pub first: usize,
    pub last: usize,
}

/// The visible page plus pagination metadata.
///
/// Rows borrow from the record store snapshot the view was composed from.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedView<'a> {
    pub rows: Vec<&'a StreamRecord>,
    pub total_matching: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

impl<'a> DerivedView<'a> {
    pub(crate) fn new(
        rows: Vec<&'a StreamRecord>,
        pagination: Pagination,
        searching: bool,
    ) -> Self {
        let empty_state = match (pagination.total_matching, searching) {
            (0, true) => Some(EmptyState::NoMatches),
            (0, false) => Some(EmptyState::NoData),
            _ => None,
        };

        Self {
            rows,
            total_matching: pagination.total_matching,
            total_pages: pagination.total_pages,
            page: pagination.page,
            page_size: pagination.page_size,
            empty_state,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            total_matching: self.total_matching,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// "Showing {first} to {last}" bounds; `None` when nothing is shown
    pub fn range(&self) -> Option<RowRange> {
        if self.rows.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some(RowRange {
            first,
            last: first + self.rows.len() - 1,
        })
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
