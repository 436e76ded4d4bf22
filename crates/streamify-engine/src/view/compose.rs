use streamify_types::{PageState, SearchQuery, SortState, StreamRecord};

use super::{DerivedView, filter_records, paginate, sort_records};

/// search → sort → paginate over a borrowed record slice
pub fn compose<'a>(
    records: &'a [StreamRecord],
    search: &SearchQuery,
    sort: Option<SortState>,
    page: PageState,
) -> DerivedView<'a> {
    let mut matching = filter_records(records, search);

    if let Some(sort) = sort {
        sort_records(&mut matching, sort);
    }

    let pagination = paginate(matching.len(), page.number, page.size);
    let range = pagination.range();
    let rows = matching[range].to_vec();

    tracing::trace!(
        search = search.as_str(),
        matching = pagination.total_matching,
        page = pagination.page,
        rows = rows.len(),
        "composed view"
    );

    DerivedView::new(rows, pagination, !search.is_empty())
}
