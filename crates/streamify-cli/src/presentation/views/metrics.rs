use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{CreateView, MetricsViewModel, StatusLevel};

impl CreateView for MetricsViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(MetricsView { data: self })
    }
}

struct MetricsView<'a> {
    data: &'a MetricsViewModel,
}

impl<'a> fmt::Display for MetricsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(placeholder) = &self.data.placeholder {
            return writeln!(f, "{}", placeholder);
        }

        let title_width = self
            .data
            .cards
            .iter()
            .map(|c| c.title.len())
            .max()
            .unwrap_or(0);

        for card in &self.data.cards {
            write!(f, "{:<width$}  {}", card.title, card.value.bold(), width = title_width)?;
            if let Some(change) = &card.change {
                match change.level {
                    StatusLevel::Success => write!(f, "  {}", change.text.green())?,
                    StatusLevel::Error => write!(f, "  {}", change.text.red())?,
                    _ => write!(f, "  {}", change.text)?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
