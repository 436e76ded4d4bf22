use streamify_types::{ChartData, ChartKind, DashboardCharts};

use crate::presentation::view_models::{
    ChartPanelViewModel, ChartSeriesViewModel, ChartStyle, ChartsViewModel,
};

fn style_of(kind: ChartKind) -> ChartStyle {
    match kind {
        ChartKind::Line => ChartStyle::Line,
        ChartKind::Bar => ChartStyle::Bar,
        ChartKind::Pie => ChartStyle::Pie,
    }
}

/// A missing dataset becomes an empty panel so the layout stays stable
pub fn present_chart_panel(
    title: &str,
    kind: ChartKind,
    data: Option<&ChartData>,
) -> ChartPanelViewModel {
    let Some(data) = data else {
        return ChartPanelViewModel {
            title: title.to_string(),
            style: style_of(kind),
            labels: Vec::new(),
            series: Vec::new(),
            max_value: 0.0,
            total: 0.0,
        };
    };

    let series = data
        .series
        .iter()
        .map(|s| ChartSeriesViewModel {
            name: s.name.clone().unwrap_or_else(|| title.to_string()),
            values: s.values.clone(),
            colors: s.colors.clone().unwrap_or_default(),
        })
        .collect::<Vec<_>>();

    let total = series
        .first()
        .map(|s| s.values.iter().sum::<f64>())
        .unwrap_or(0.0);

    ChartPanelViewModel {
        title: title.to_string(),
        style: style_of(kind),
        labels: data.labels.clone(),
        series,
        max_value: data.max_value(),
        total,
    }
}

pub fn present_charts(charts: &DashboardCharts) -> ChartsViewModel {
    ChartsViewModel {
        panels: vec![
            present_chart_panel("User Growth", ChartKind::Line, charts.user_growth.as_ref()),
            present_chart_panel("Top Songs", ChartKind::Bar, charts.top_songs.as_ref()),
            present_chart_panel(
                "Revenue Distribution",
                ChartKind::Pie,
                charts.revenue_distribution.as_ref(),
            ),
        ],
    }
}
