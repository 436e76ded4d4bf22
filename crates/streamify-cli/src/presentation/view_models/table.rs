use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ColumnHeaderViewModel {
    pub label: String,
    pub field: String,
    /// Key that toggles sorting on this column in the TUI
    pub hotkey: char,
    /// "▲" or "▼" on the active sort column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_indicator: Option<String>,
    pub numeric: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StreamRowViewModel {
    pub id: String,
    pub song_name: String,
    pub artist: String,
    pub date_streamed: String,
    pub stream_count: String,
    pub user_id: String,
}

impl StreamRowViewModel {
    /// Cell texts in column order
    pub fn cells(&self) -> [&str; 5] {
        [
            self.song_name.as_str(),
            self.artist.as_str(),
            self.date_streamed.as_str(),
            self.stream_count.as_str(),
            self.user_id.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginationViewModel {
    /// "Showing 11 to 20 of 95 results"
    pub summary: String,
    pub current_page: usize,
    pub total_pages: usize,
    pub pages: Vec<usize>,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StreamTableViewModel {
    pub search: String,
    pub columns: Vec<ColumnHeaderViewModel>,
    pub rows: Vec<StreamRowViewModel>,
    pub total_matching: usize,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    /// Present only when there is more than one page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationViewModel>,
}
