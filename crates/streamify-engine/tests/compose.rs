use chrono::{DateTime, Duration, TimeZone, Utc};
use streamify_engine::{ControlEvent, EmptyState, TableControls, compose};
use streamify_types::{
    PageState, SearchQuery, SortDirection, SortField, SortState, StreamRecord,
};

const SONGS: [(&str, &str); 5] = [
    ("Shape of You", "Ed Sheeran"),
    ("Blinding Lights", "The Weeknd"),
    ("Dance Monkey", "Tones and I"),
    ("Someone Like You", "Adele"),
    ("Uptown Funk", "Mark Ronson ft. Bruno Mars"),
];

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 14, 0, 0, 0).unwrap()
}

// Deterministic spread of songs, days and counts; counts are distinct
fn records(n: usize) -> Vec<StreamRecord> {
    (0..n)
        .map(|i| {
            let (song, artist) = SONGS[(i * 7 + 3) % SONGS.len()];
            StreamRecord::new(
                format!("stream-{}", i),
                song,
                artist,
                base_time() - Duration::days(((i * 13) % 30) as i64),
                100_000 + ((i as u64 * 7_919) % 1_000_000) * 3 + i as u64,
                format!("user-{}", (i * 37) % 1000),
            )
        })
        .collect()
}

fn ids(rows: &[&StreamRecord]) -> Vec<String> {
    rows.iter().map(|r| r.id.to_string()).collect()
}

#[test]
fn test_search_shape_scenario() {
    let records = vec![
        StreamRecord::new("stream-0", "Shape of You", "Ed Sheeran", base_time(), 500_000, "user-1"),
        StreamRecord::new("stream-1", "Dance Monkey", "Tones and I", base_time(), 400_000, "user-2"),
    ];

    let view = compose(&records, &"shape".into(), None, PageState::first(10));

    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].song_name, "Shape of You");
    assert_eq!(view.total_matching, 1);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.empty_state, None);
}

#[test]
fn test_every_row_matches_search() {
    let records = records(100);
    for query in ["", "e", "DANCE", "ed ", "ft.", "you", "zzz"] {
        let search = SearchQuery::from(query);
        let view = compose(&records, &search, None, PageState::first(50));
        let needle = query.to_lowercase();
        for row in &view.rows {
            assert!(
                row.song_name.to_lowercase().contains(&needle)
                    || row.artist.to_lowercase().contains(&needle),
                "{:?} does not match {:?}",
                row,
                query
            );
        }
    }
}

#[test]
fn test_no_search_keeps_natural_order() {
    let records = records(30);
    let view = compose(&records, &SearchQuery::default(), None, PageState::first(50));
    let expected: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(ids(&view.rows), expected);
}

#[test]
fn test_output_sorted_for_every_field_and_direction() {
    let records = records(80);
    for field in SortField::ALL {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sort = SortState::new(field, direction);
            let view = compose(&records, &SearchQuery::default(), Some(sort), PageState::first(50));
            for pair in view.rows.windows(2) {
                let ord = streamify_engine::compare_by(field, pair[0], pair[1]);
                match direction {
                    SortDirection::Ascending => assert!(ord.is_le(), "{:?} {:?}", field, direction),
                    SortDirection::Descending => assert!(ord.is_ge(), "{:?} {:?}", field, direction),
                }
            }
        }
    }
}

#[test]
fn test_descending_is_exact_reverse_without_ties() {
    let records = records(40);
    let page = PageState::first(50);
    let search = SearchQuery::default();

    let asc = compose(&records, &search, Some(SortState::ascending(SortField::StreamCount)), page);
    let desc = compose(&records, &search, Some(SortState::descending(SortField::StreamCount)), page);

    let mut reversed = ids(&desc.rows);
    reversed.reverse();
    assert_eq!(ids(&asc.rows), reversed);
}

#[test]
fn test_toggle_round_trip_restores_ascending_order() {
    let records = records(60);
    let mut controls = TableControls::with_page_size(Default::default(), 50).unwrap();

    controls.apply(ControlEvent::SortToggled(SortField::SongName));
    let first = ids(&controls.compose(&records).rows);

    controls.apply(ControlEvent::SortToggled(SortField::SongName));
    controls.apply(ControlEvent::SortToggled(SortField::SongName));
    assert_eq!(controls.sort(), Some(SortState::ascending(SortField::SongName)));

    let again = ids(&controls.compose(&records).rows);
    assert_eq!(first, again);
}

#[test]
fn test_page_count_matches_ceiling_for_all_sizes() {
    for n in [0usize, 1, 9, 10, 11, 24, 25, 26, 49, 50, 51, 99, 100, 101] {
        let records = records(n);
        for size in [10usize, 25, 50] {
            let view = compose(&records, &SearchQuery::default(), None, PageState::first(size));
            assert_eq!(view.total_pages, n.div_ceil(size), "n={} size={}", n, size);
            assert!(view.rows.len() <= size);
            assert_eq!(view.rows.is_empty(), n == 0);
        }
    }
}

#[test]
fn test_requested_page_is_always_clamped() {
    let records = records(37);
    for requested in [i64::MIN, -3, 0, 1, 2, 4, 5, 1_000, i64::MAX] {
        let view = compose(&records, &SearchQuery::default(), None, PageState::new(requested, 10));
        assert!(view.page >= 1);
        assert!(view.page <= view.total_pages.max(1));
        assert!(!view.rows.is_empty());
    }
}

#[test]
fn test_page_size_ten_boundaries() {
    let search = SearchQuery::default();

    let ten = records(10);
    assert_eq!(compose(&ten, &search, None, PageState::first(10)).total_pages, 1);

    let nine = records(9);
    assert_eq!(compose(&nine, &search, None, PageState::first(10)).total_pages, 1);

    let eleven = records(11);
    let view = compose(&eleven, &search, None, PageState::new(2, 10));
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].id.as_str(), "stream-10");
}

#[test]
fn test_top_play_counts_paged_descending() {
    let records = records(100);
    let sort = Some(SortState::descending(SortField::StreamCount));
    let search = SearchQuery::default();

    let mut all_counts: Vec<u64> = records.iter().map(|r| r.stream_count).collect();
    all_counts.sort_unstable_by(|a, b| b.cmp(a));

    let page1 = compose(&records, &search, sort, PageState::new(1, 25));
    let counts1: Vec<u64> = page1.rows.iter().map(|r| r.stream_count).collect();
    assert_eq!(counts1, all_counts[..25].to_vec());

    let page4 = compose(&records, &search, sort, PageState::new(4, 25));
    assert_eq!(page4.rows.len(), 25);
    let counts4: Vec<u64> = page4.rows.iter().map(|r| r.stream_count).collect();
    assert_eq!(counts4, all_counts[75..].to_vec());
    assert!(counts1.last().unwrap() >= counts4.first().unwrap());
}

#[test]
fn test_empty_store_signals_no_data() {
    let view = compose(&[], &SearchQuery::default(), None, PageState::first(10));
    assert_eq!(view.empty_state, Some(EmptyState::NoData));
    assert_eq!(view.total_matching, 0);
    assert_eq!(view.total_pages, 0);
    assert_eq!(view.page, 1);
}

#[test]
fn test_empty_store_with_search_signals_no_matches() {
    let view = compose(&[], &"adele".into(), None, PageState::new(2, 10));
    assert_eq!(view.empty_state, Some(EmptyState::NoMatches));
    assert_eq!(view.total_pages, 0);
    assert_eq!(view.page, 1);
}

#[test]
fn test_unmatched_search_signals_no_matches() {
    let records = records(20);
    let view = compose(&records, &"metallica".into(), None, PageState::new(3, 10));
    assert_eq!(view.empty_state, Some(EmptyState::NoMatches));
    assert!(view.rows.is_empty());
    assert_eq!(view.page, 1);
    assert_eq!(view.range(), None);
}

#[test]
fn test_controls_view_resyncs_page_after_filter_shrinks() {
    let records = records(100);
    let mut controls = TableControls::default();
    controls.apply(ControlEvent::LastPage);
    let view = controls.view(&records);
    assert_eq!(view.page, 10);
    assert_eq!(controls.page().number, 10);

    // Sort does not reset the page; it only gets clamped
    controls.apply(ControlEvent::SortToggled(SortField::Artist));
    assert_eq!(controls.view(&records).page, 10);

    controls.apply(ControlEvent::NextPage);
    assert_eq!(controls.view(&records).page, 10);
    assert_eq!(controls.page().number, 10);

    controls.apply(ControlEvent::PreviousPage);
    assert_eq!(controls.view(&records).page, 9);
}

#[test]
fn test_view_range_and_navigation_flags() {
    let records = records(95);
    let view = compose(&records, &SearchQuery::default(), None, PageState::new(10, 10));
    let range = view.range().unwrap();
    assert_eq!((range.first, range.last), (91, 95));
    assert!(view.has_previous());
    assert!(!view.has_next());
}

#[test]
fn test_view_metadata_snapshot() {
    let records = records(11);
    let view = compose(&records, &SearchQuery::default(), None, PageState::new(7, 10));

    insta::assert_json_snapshot!(view.pagination(), @r###"
    {
      "total_matching": 11,
      "total_pages": 2,
      "page": 2,
      "page_size": 10
    }
    "###);
}
