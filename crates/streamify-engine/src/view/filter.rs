use streamify_types::{SearchQuery, StreamRecord};

// `needle` is already lowercased
fn matches_needle(record: &StreamRecord, needle: &str) -> bool {
    record.song_name.to_lowercase().contains(needle) || record.artist.to_lowercase().contains(needle)
}

/// Keep records whose song name or artist contains the query,
/// case-insensitively, preserving store order. An empty query keeps everything.
pub fn filter_records<'a>(records: &'a [StreamRecord], query: &SearchQuery) -> Vec<&'a StreamRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.as_str().to_lowercase();
    records
        .iter()
        .filter(|record| matches_needle(record, &needle))
        .collect()
}
