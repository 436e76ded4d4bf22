//! Ratatui widgets for the dashboard.
//!
//! Each widget is a thin wrapper around a view model. Color mapping from
//! `StatusLevel` and hex chart colors to ratatui colors happens here.

pub mod header;
pub mod metric_cards;
pub mod status_bar;
pub mod stream_table;

pub use header::HeaderView;
pub use metric_cards::MetricCardsView;
pub use status_bar::StatusBarView;
pub use stream_table::StreamTableView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// `#rrggbb` to an RGB color, `fallback` when absent or malformed
pub(crate) fn hex_to_color(hex: Option<&str>, fallback: Color) -> Color {
    hex.and_then(|h| h.parse::<Color>().ok())
        .unwrap_or(fallback)
}
