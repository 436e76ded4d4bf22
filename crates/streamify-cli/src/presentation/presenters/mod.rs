pub mod charts;
pub mod config;
pub mod metrics;
pub mod screen;
pub mod table;

pub use charts::{present_chart_panel, present_charts};
pub use config::{present_config, present_config_init};
pub use metrics::present_metrics;
pub use screen::present_dashboard;
pub use table::{NO_DATA_MESSAGE, NO_MATCHES_MESSAGE, present_table};
