pub mod console;
pub mod text_chart;
pub mod traits;
pub mod tui;

pub use console::ConsoleRenderer;
pub use text_chart::TextChartSink;
pub use traits::{ChartSink, Renderer};
pub use tui::TuiRenderer;
