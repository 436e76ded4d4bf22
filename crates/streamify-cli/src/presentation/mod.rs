//! # Presentation Layer
//!
//! MVVM-style separation between the dashboard engine and what the user sees.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer / View ] --> [ Output ]
//!  (Controller)     (Converter)       (Contract)       (Console/JSON/TUI)
//! ```
//!
//! - `view_models/`: serializable data contract. No logic.
//! - `presenters/`: pure functions from context/domain data to view models.
//!   Formatting decisions, tones and empty-state messages live here.
//! - `views/`: plain-text `Display` views and ratatui widgets over view models.
//! - `renderers/`: output strategies (console text/JSON, interactive TUI) and
//!   the `ChartSink` collaborator that draws chart panels.
//! - `formatters/`: small string helpers shared by everything above.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ChartSink, ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, StatusBadge, StatusLevel};
