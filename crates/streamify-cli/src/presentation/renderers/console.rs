use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};

pub struct ConsoleRenderer {
    json_mode: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self { json_mode }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            println!("{} {}", badge.icon(), badge.label.bold());
            println!();
        }

        print!("{}", result.content.create_view());

        Ok(())
    }
}
