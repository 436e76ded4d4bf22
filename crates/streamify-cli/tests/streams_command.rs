mod common;

use common::TestFixture;
use predicates::prelude::*;

fn count(cell: &serde_json::Value) -> u64 {
    cell.as_str()
        .expect("stream_count is a string")
        .replace(',', "")
        .parse()
        .expect("stream_count is numeric")
}

#[test]
fn test_default_page_of_mock_streams() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("streams")
        .assert()
        .success()
        .stdout(predicate::str::contains("Song Name"))
        .stdout(predicate::str::contains("Date Streamed"))
        .stdout(predicate::str::contains("Showing 1 to 10 of 100 results"))
        .stdout(predicate::str::contains("Page 1 of 10: [1] 2 3 4 5 6 7"));
}

#[test]
fn test_search_filters_rows() {
    let fixture = TestFixture::new();
    let result = fixture.json(&["streams", "--search", "SHAPE", "--per-page", "50"]);

    let rows = result["content"]["rows"].as_array().unwrap();
    assert!(!rows.is_empty());
    for row in rows {
        assert_eq!(row["song_name"], "Shape of You");
    }
    assert_eq!(result["content"]["search"], "SHAPE");
}

#[test]
fn test_search_without_matches() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["streams", "--search", "metallica"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No results found. Try a different search term.",
        ))
        .stdout(predicate::str::contains("Showing").not());
}

#[test]
fn test_empty_store() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--records", "0", "streams"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No streams available."));
}

#[test]
fn test_empty_store_with_search_reports_no_results() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--records", "0", "streams", "--search", "adele"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No results found. Try a different search term.",
        ))
        .stdout(predicate::str::contains("No streams available.").not());
}

#[test]
fn test_sorted_descending_by_count() {
    let fixture = TestFixture::new();
    let result = fixture.json(&[
        "streams",
        "--sort",
        "stream_count",
        "--order",
        "desc",
        "--per-page",
        "25",
    ]);

    let content = &result["content"];
    let counts: Vec<u64> = content["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| count(&row["stream_count"]))
        .collect();
    assert_eq!(counts.len(), 25);
    assert!(counts.windows(2).all(|w| w[0] >= w[1]));

    assert_eq!(content["columns"][3]["sort_indicator"], "▼");
    assert_eq!(
        content["pagination"]["summary"],
        "Showing 1 to 25 of 100 results"
    );
}

#[test]
fn test_unknown_sort_field_keeps_natural_order() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["streams", "--sort", "duration"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unknown sort field 'duration', showing natural order",
        ))
        .stderr(predicate::str::contains("duration"));

    let natural = fixture.json(&["streams"]);
    let unknown = fixture.json(&["streams", "--sort", "duration"]);
    assert_eq!(natural["content"]["rows"], unknown["content"]["rows"]);
}

#[test]
fn test_out_of_range_pages_are_clamped() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["streams", "--page", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 91 to 100 of 100 results"));

    fixture
        .command()
        .args(["streams", "--page", "-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 to 10 of 100 results"));
}

#[test]
fn test_disallowed_page_size_is_an_error() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["streams", "--per-page", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "--per-page must be one of [10, 25, 50]",
        ));
}

#[test]
fn test_single_page_has_no_footer() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--records", "7", "streams"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing").not());
}

#[test]
fn test_same_seed_same_rows() {
    let fixture = TestFixture::new();
    let first = fixture.json(&["streams"]);
    let second = fixture.json(&["streams"]);
    assert_eq!(first["content"]["rows"], second["content"]["rows"]);
}
