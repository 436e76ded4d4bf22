use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    /// Whether `path` exists; otherwise the values are built-in defaults
    pub from_file: bool,
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
    pub stream_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub written: bool,
}
