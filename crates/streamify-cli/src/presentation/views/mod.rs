//! Plain-text views (`CreateView` impls) and ratatui widgets (`tui/`).
//!
//! Views only lay out what view models already decided.

mod charts;
mod config;
mod metrics;
mod screen;
mod table;
pub mod tui;

pub use table::TableView;
