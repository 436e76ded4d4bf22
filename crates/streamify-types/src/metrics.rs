use serde::{Deserialize, Serialize};

use crate::ChartData;

/// Pre-aggregated headline numbers shown on the metric cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_users: u64,
    pub active_users: u64,
    /// Already formatted upstream (e.g. "1.2M")
    pub total_streams: String,
    /// Already formatted upstream (e.g. "$2.4M")
    pub revenue: String,
    pub top_artist: String,
    pub changes: MetricChanges,
}

/// Period-over-period change, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricChanges {
    pub total_users: f64,
    pub active_users: f64,
    pub total_streams: f64,
    pub revenue: f64,
}

/// The three chart datasets of the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub user_growth: Option<ChartData>,
    pub top_songs: Option<ChartData>,
    pub revenue_distribution: Option<ChartData>,
}
