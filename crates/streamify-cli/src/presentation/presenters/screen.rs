use chrono::{DateTime, Local};
use streamify_engine::{DerivedView, TableControls};
use streamify_runtime::DashboardContext;

use super::{present_charts, present_metrics, present_table};
use crate::presentation::formatters::format_updated_at;
use crate::presentation::view_models::{
    DashboardScreenViewModel, InputMode, StatusBarViewModel, StatusLevel,
};

const TITLE: &str = "Streamify Dashboard";

fn hints(mode: InputMode) -> Vec<(String, String)> {
    let pairs: &[(&str, &str)] = match mode {
        InputMode::Normal => &[
            ("/", "search"),
            ("1-5", "sort"),
            ("0", "unsort"),
            ("←/→", "page"),
            ("g/G", "ends"),
            ("s", "page size"),
            ("x", "clear"),
            ("q", "quit"),
        ],
        InputMode::Search => &[("type", "filter"), ("Enter/Esc", "done"), ("Ctrl+U", "clear")],
    };
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn present_status(
    view: &DerivedView<'_>,
    controls: &TableControls,
    mode: InputMode,
) -> StatusBarViewModel {
    let (message, level) = match mode {
        InputMode::Search => (format!("Search: {}▏", controls.search()), StatusLevel::Info),
        InputMode::Normal if view.empty_state.is_some() => {
            ("No rows to show".to_string(), StatusLevel::Warning)
        }
        InputMode::Normal => (
            format!(
                "{} matching · page {}/{} · {} per page",
                view.total_matching,
                view.page,
                view.total_pages.max(1),
                view.page_size
            ),
            StatusLevel::Success,
        ),
    };

    StatusBarViewModel {
        mode,
        message,
        level,
        key_hints: hints(mode),
    }
}

/// Full dashboard frame for the current context state
pub fn present_dashboard(
    ctx: &DashboardContext,
    mode: InputMode,
    updated_at: DateTime<Local>,
) -> DashboardScreenViewModel {
    let view = ctx.current_view();

    DashboardScreenViewModel {
        title: TITLE.to_string(),
        last_updated: format_updated_at(updated_at),
        metrics: present_metrics(ctx.store().metrics()),
        charts: present_charts(ctx.store().charts()),
        table: present_table(&view, ctx.controls()),
        status: present_status(&view, ctx.controls(), mode),
    }
}
