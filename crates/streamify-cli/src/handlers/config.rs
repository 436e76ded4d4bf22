use anyhow::Result;
use std::path::Path;
use streamify_runtime::Config;

use crate::presentation::presenters::{present_config, present_config_init};
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Renderer, StatusBadge};

pub fn show(config: &Config, path: &Path, json: bool) -> Result<()> {
    let view_model = present_config(config, path);
    ConsoleRenderer::new(json).render(CommandResultViewModel::new(view_model))
}

pub fn init(path: &Path, force: bool, json: bool) -> Result<()> {
    let written = if path.exists() && !force {
        false
    } else {
        Config::default().save_to(path)?;
        tracing::info!(path = %path.display(), "wrote default config");
        true
    };

    let mut result = CommandResultViewModel::new(present_config_init(path, written));
    if written {
        result = result.with_badge(StatusBadge::success("Config initialized"));
    }
    ConsoleRenderer::new(json).render(result)
}
