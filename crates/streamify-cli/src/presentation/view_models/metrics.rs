use serde::Serialize;

use super::common::StatusLevel;

#[derive(Debug, Clone, Serialize)]
pub struct ChangeBadgeViewModel {
    pub text: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricCardViewModel {
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<ChangeBadgeViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsViewModel {
    pub cards: Vec<MetricCardViewModel>,
    /// Shown instead of cards when no metrics are loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}
