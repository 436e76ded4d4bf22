use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use streamify_types::{SortDirection, SortField, SortState, StreamRecord};

/// Untyped sort request as it arrives from a caller (CLI flag, header id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRequest {
    pub field: String,
    pub direction: SortDirection,
}

impl SortRequest {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// Resolve a raw sort request against the record schema.
///
/// Unknown fields are a caller error: logged, then treated as "no sort".
pub fn resolve_sort(request: Option<&SortRequest>) -> Option<SortState> {
    let request = request?;
    match request.field.parse::<SortField>() {
        Ok(field) => Some(SortState::new(field, request.direction)),
        Err(err) => {
            tracing::warn!("{}; keeping natural order", err);
            None
        }
    }
}

/// Natural ascending comparison of two records on one field
pub fn compare_by(field: SortField, a: &StreamRecord, b: &StreamRecord) -> Ordering {
    match field {
        SortField::SongName => a.song_name.cmp(&b.song_name),
        SortField::Artist => a.artist.cmp(&b.artist),
        SortField::StreamedAt => a.streamed_at.cmp(&b.streamed_at),
        SortField::StreamCount => a.stream_count.cmp(&b.stream_count),
        SortField::UserId => a.user_id.cmp(&b.user_id),
    }
}

/// Stable in-place sort; equal records keep their incoming order in both directions
pub fn sort_records(records: &mut [&StreamRecord], sort: SortState) {
    records.sort_by(|a, b| {
        let ord = compare_by(sort.field, a, b);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}
