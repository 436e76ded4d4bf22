use std::fmt;

pub mod chart;
pub mod common;
pub mod config;
pub mod metrics;
pub mod result;
pub mod screen;
pub mod table;

pub use chart::{ChartPanelViewModel, ChartSeriesViewModel, ChartStyle, ChartsViewModel};
pub use common::{StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use metrics::{ChangeBadgeViewModel, MetricCardViewModel, MetricsViewModel};
pub use result::CommandResultViewModel;
pub use screen::{DashboardScreenViewModel, InputMode, StatusBarViewModel};
pub use table::{
    ColumnHeaderViewModel, PaginationViewModel, StreamRowViewModel, StreamTableViewModel,
};

/// Plain-text rendering of a view model; implemented in `views/`
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
