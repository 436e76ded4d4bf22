use anyhow::Result;
use serde::Serialize;

use crate::presentation::view_models::{ChartPanelViewModel, CommandResultViewModel, CreateView};

pub trait Renderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView;
}

/// Chart drawing collaborator. The dashboard decides what to chart; sinks
/// decide how a line, bar or pie panel looks on their surface.
pub trait ChartSink {
    fn draw(&mut self, panel: &ChartPanelViewModel);
}
