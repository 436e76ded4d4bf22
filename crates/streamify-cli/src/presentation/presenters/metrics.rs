use streamify_types::DashboardMetrics;

use crate::presentation::formatters::{format_change, format_count};
use crate::presentation::view_models::{
    ChangeBadgeViewModel, MetricCardViewModel, MetricsViewModel, StatusLevel,
};

fn change_badge(change: f64) -> ChangeBadgeViewModel {
    ChangeBadgeViewModel {
        text: format_change(change),
        level: if change >= 0.0 {
            StatusLevel::Success
        } else {
            StatusLevel::Error
        },
    }
}

fn card(title: &str, value: String, change: Option<f64>) -> MetricCardViewModel {
    MetricCardViewModel {
        title: title.to_string(),
        value,
        change: change.map(change_badge),
    }
}

pub fn present_metrics(metrics: Option<&DashboardMetrics>) -> MetricsViewModel {
    let Some(m) = metrics else {
        return MetricsViewModel {
            cards: Vec::new(),
            placeholder: Some("No metrics available.".to_string()),
        };
    };

    MetricsViewModel {
        cards: vec![
            card(
                "Total Users",
                format_count(m.total_users),
                Some(m.changes.total_users),
            ),
            card(
                "Active Users",
                format_count(m.active_users),
                Some(m.changes.active_users),
            ),
            card(
                "Total Streams",
                m.total_streams.clone(),
                Some(m.changes.total_streams),
            ),
            card("Revenue", m.revenue.clone(), Some(m.changes.revenue)),
            card("Top Artist", m.top_artist.clone(), None),
        ],
        placeholder: None,
    }
}
