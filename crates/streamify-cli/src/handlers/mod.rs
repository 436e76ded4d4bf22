pub mod charts;
pub mod config;
pub mod dashboard;
pub mod metrics;
pub mod streams;

use anyhow::Result;
use chrono::Utc;
use streamify_runtime::{Config, DashboardContext};

/// Fresh session over mock data generated now
pub(crate) fn load_context(config: &Config) -> Result<DashboardContext> {
    let ctx = DashboardContext::bootstrap(config, Utc::now())?;
    tracing::debug!(records = ctx.store().len(), "dashboard context ready");
    Ok(ctx)
}
