use chrono::{DateTime, Local, Utc};

/// Calendar date shown in the "Date Streamed" column
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

pub fn format_updated_at(ts: DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
