use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::status_level_to_color;
use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(inner);

        Paragraph::new(Span::styled(
            self.model.message.as_str(),
            Style::default().fg(status_level_to_color(self.model.level)),
        ))
        .render(chunks[0], buf);

        let mut spans = Vec::with_capacity(self.model.key_hints.len() * 2);
        for (key, action) in &self.model.key_hints {
            spans.push(Span::styled(
                format!("[{}]", key),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(format!("{} ", action)));
        }
        Paragraph::new(Line::from(spans)).render(chunks[1], buf);
    }
}
