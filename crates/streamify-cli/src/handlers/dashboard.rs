use anyhow::Result;
use chrono::Local;
use streamify_runtime::Config;

use super::load_context;
use crate::presentation::presenters::present_dashboard;
use crate::presentation::view_models::InputMode;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Renderer, TuiRenderer};

/// Interactive TUI on a terminal, a static snapshot otherwise
pub fn handle(config: &Config, interactive: bool, json: bool) -> Result<()> {
    let ctx = load_context(config)?;

    if interactive && !json {
        tracing::info!(records = ctx.store().len(), "starting dashboard");
        return TuiRenderer::new(ctx).run();
    }

    let screen = present_dashboard(&ctx, InputMode::Normal, Local::now());
    ConsoleRenderer::new(json).render(CommandResultViewModel::new(screen))
}
