use serde::Serialize;

use super::chart::ChartsViewModel;
use super::common::StatusLevel;
use super::metrics::MetricsViewModel;
use super::table::StreamTableViewModel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub mode: InputMode,
    pub message: String,
    pub level: StatusLevel,
    /// (key, action) pairs for the help line
    pub key_hints: Vec<(String, String)>,
}

/// Everything one dashboard frame shows
#[derive(Debug, Clone, Serialize)]
pub struct DashboardScreenViewModel {
    pub title: String,
    pub last_updated: String,
    pub metrics: MetricsViewModel,
    pub charts: ChartsViewModel,
    pub table: StreamTableViewModel,
    pub status: StatusBarViewModel,
}
