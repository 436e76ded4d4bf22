use anyhow::Result;
use streamify_runtime::Config;

use super::load_context;
use crate::presentation::presenters::present_metrics;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Renderer};

pub fn handle(config: &Config, json: bool) -> Result<()> {
    let ctx = load_context(config)?;
    let view_model = present_metrics(ctx.store().metrics());

    ConsoleRenderer::new(json).render(CommandResultViewModel::new(view_model))
}
