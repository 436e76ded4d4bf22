use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{CreateView, DashboardScreenViewModel};

impl CreateView for DashboardScreenViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(DashboardView { data: self })
    }
}

/// Static snapshot of the dashboard for non-interactive output
struct DashboardView<'a> {
    data: &'a DashboardScreenViewModel,
}

impl<'a> fmt::Display for DashboardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.title.bold())?;
        writeln!(f, "Last updated: {}", self.data.last_updated)?;
        writeln!(f)?;
        write!(f, "{}", self.data.metrics.create_view())?;
        writeln!(f)?;
        write!(f, "{}", self.data.charts.create_view())?;
        writeln!(f)?;
        write!(f, "{}", self.data.table.create_view())
    }
}
