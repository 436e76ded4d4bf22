use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::status_level_to_color;
use crate::presentation::view_models::MetricsViewModel;

/// Row of equally wide metric cards
pub struct MetricCardsView<'a> {
    model: &'a MetricsViewModel,
}

impl<'a> MetricCardsView<'a> {
    pub fn new(model: &'a MetricsViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for MetricCardsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(placeholder) = &self.model.placeholder {
            Paragraph::new(placeholder.as_str())
                .block(Block::default().borders(Borders::ALL).title(" Metrics "))
                .render(area, buf);
            return;
        }

        let count = self.model.cards.len().max(1) as u32;
        let chunks = Layout::horizontal(
            (0..count).map(|_| Constraint::Ratio(1, count)),
        )
        .split(area);

        for (card, chunk) in self.model.cards.iter().zip(chunks.iter()) {
            let mut lines = vec![Line::from(Span::styled(
                card.value.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];

            if let Some(change) = &card.change {
                lines.push(Line::from(vec![
                    Span::styled(
                        change.text.as_str(),
                        Style::default().fg(status_level_to_color(change.level)),
                    ),
                    Span::raw(" vs last month"),
                ]));
            }

            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" {} ", card.title)),
                )
                .render(*chunk, buf);
        }
    }
}
