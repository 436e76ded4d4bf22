mod compose;
mod derived;
mod filter;
mod paginate;
mod sort;

pub use compose::compose;
pub use derived::{DerivedView, EmptyState, RowRange};
pub use filter::filter_records;
pub use paginate::{Pagination, paginate};
pub use sort::{SortRequest, compare_by, resolve_sort, sort_records};
