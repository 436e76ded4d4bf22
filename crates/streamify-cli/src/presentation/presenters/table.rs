use streamify_engine::{DerivedView, EmptyState, TableControls};
use streamify_types::{SortDirection, SortField, StreamRecord};

use crate::presentation::formatters::{format_count, format_date};
use crate::presentation::view_models::{
    ColumnHeaderViewModel, PaginationViewModel, StreamRowViewModel, StreamTableViewModel,
};

pub const NO_DATA_MESSAGE: &str = "No streams available.";
pub const NO_MATCHES_MESSAGE: &str = "No results found. Try a different search term.";

/// Page buttons shown around the current page
const PAGE_WINDOW: usize = 7;

fn sort_indicator(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

fn present_row(record: &StreamRecord) -> StreamRowViewModel {
    StreamRowViewModel {
        id: record.id.to_string(),
        song_name: record.song_name.clone(),
        artist: record.artist.clone(),
        date_streamed: format_date(record.streamed_at),
        stream_count: format_count(record.stream_count),
        user_id: record.user_id.clone(),
    }
}

/// Contiguous run of at most `width` page numbers containing `current`
fn page_window(current: usize, total: usize, width: usize) -> Vec<usize> {
    if total <= width {
        return (1..=total).collect();
    }
    let half = width / 2;
    let start = current.saturating_sub(half).max(1).min(total + 1 - width);
    (start..start + width).collect()
}

fn present_pagination(view: &DerivedView<'_>) -> Option<PaginationViewModel> {
    if view.total_pages <= 1 {
        return None;
    }
    let range = view.range()?;

    Some(PaginationViewModel {
        summary: format!(
            "Showing {} to {} of {} results",
            range.first, range.last, view.total_matching
        ),
        current_page: view.page,
        total_pages: view.total_pages,
        pages: page_window(view.page, view.total_pages, PAGE_WINDOW),
        has_previous: view.has_previous(),
        has_next: view.has_next(),
    })
}

pub fn present_table(view: &DerivedView<'_>, controls: &TableControls) -> StreamTableViewModel {
    let sort = controls.sort();

    let columns = SortField::ALL
        .iter()
        .zip('1'..='5')
        .map(|(&field, hotkey)| ColumnHeaderViewModel {
            label: field.label().to_string(),
            field: field.as_str().to_string(),
            hotkey,
            sort_indicator: sort
                .filter(|s| s.field == field)
                .map(|s| sort_indicator(s.direction).to_string()),
            numeric: field == SortField::StreamCount,
        })
        .collect();

    let empty_message = view.empty_state.map(|state| {
        match state {
            EmptyState::NoData => NO_DATA_MESSAGE,
            EmptyState::NoMatches => NO_MATCHES_MESSAGE,
        }
        .to_string()
    });

    StreamTableViewModel {
        search: controls.search().to_string(),
        columns,
        rows: view.rows.iter().map(|r| present_row(r)).collect(),
        total_matching: view.total_matching,
        page_size: view.page_size,
        page_size_options: controls.page_size_options().as_slice().to_vec(),
        empty_message,
        pagination: present_pagination(view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use streamify_engine::ControlEvent;

    fn records(n: usize) -> Vec<StreamRecord> {
        let base = Utc.with_ymd_and_hms(2025, 5, 20, 8, 0, 0).unwrap();
        (0..n)
            .map(|i| {
                StreamRecord::new(
                    format!("stream-{}", i),
                    if i % 2 == 0 { "Shape of You" } else { "Uptown Funk" },
                    if i % 2 == 0 { "Ed Sheeran" } else { "Mark Ronson ft. Bruno Mars" },
                    base - Duration::days(i as i64),
                    1_000_000 + i as u64,
                    format!("user-{}", i),
                )
            })
            .collect()
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 3, 7), vec![1, 2, 3]);
        assert_eq!(page_window(1, 20, 7), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(page_window(10, 20, 7), vec![7, 8, 9, 10, 11, 12, 13]);
        assert_eq!(page_window(20, 20, 7), vec![14, 15, 16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_rows_are_formatted() {
        let data = records(3);
        let controls = TableControls::default();
        let vm = present_table(&controls.compose(&data), &controls);

        assert_eq!(vm.rows.len(), 3);
        assert_eq!(vm.rows[0].date_streamed, "2025-05-20");
        assert_eq!(vm.rows[0].stream_count, "1,000,000");
        assert!(vm.empty_message.is_none());
        assert!(vm.pagination.is_none());
    }

    #[test]
    fn test_sort_indicator_on_active_column_only() {
        let data = records(3);
        let mut controls = TableControls::default();
        controls.apply(ControlEvent::SortToggled(SortField::StreamCount));
        controls.apply(ControlEvent::SortToggled(SortField::StreamCount));

        let vm = present_table(&controls.compose(&data), &controls);
        let markers: Vec<Option<&str>> = vm
            .columns
            .iter()
            .map(|c| c.sort_indicator.as_deref())
            .collect();
        assert_eq!(markers, vec![None, None, None, Some("▼"), None]);
        assert_eq!(vm.columns[3].hotkey, '4');
    }

    #[test]
    fn test_pagination_summary_on_middle_page() {
        let data = records(25);
        let mut controls = TableControls::default();
        controls.apply(ControlEvent::PageSelected(2));

        let vm = present_table(&controls.compose(&data), &controls);
        let pagination = vm.pagination.unwrap();
        assert_eq!(pagination.summary, "Showing 11 to 20 of 25 results");
        assert_eq!(pagination.pages, vec![1, 2, 3]);
        assert!(pagination.has_previous && pagination.has_next);
    }

    #[test]
    fn test_empty_messages() {
        let controls = TableControls::default();
        let vm = present_table(&controls.compose(&[]), &controls);
        assert_eq!(vm.empty_message.as_deref(), Some(NO_DATA_MESSAGE));

        let data = records(4);
        let mut controls = TableControls::default();
        controls.apply(ControlEvent::SearchChanged("adele".into()));
        let vm = present_table(&controls.compose(&data), &controls);
        assert_eq!(vm.empty_message.as_deref(), Some(NO_MATCHES_MESSAGE));
        assert_eq!(vm.search, "adele");
    }
}
