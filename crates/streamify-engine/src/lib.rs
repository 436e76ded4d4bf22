// Engine module - table view composition (filter, sort, paginate)
// This layer sits between the record store (runtime) and CLI presentation

pub mod controls;
pub mod view;

pub use controls::{ControlEvent, TableControls};
pub use view::{
    DerivedView, EmptyState, Pagination, RowRange, SortRequest, compare_by, filter_records,
    paginate, resolve_sort,
};

use streamify_types::{PageState, SearchQuery, SortState, StreamRecord};

// Façade API - Stable public interface for runtime and CLI layers

/// Derive the visible page from the full record set and the three control states.
///
/// Runs search → sort → paginate in that order. Never fails: out-of-range
/// pages are clamped and empty results carry an explicit empty state.
pub fn compose<'a>(
    records: &'a [StreamRecord],
    search: &SearchQuery,
    sort: Option<SortState>,
    page: PageState,
) -> DerivedView<'a> {
    view::compose(records, search, sort, page)
}
