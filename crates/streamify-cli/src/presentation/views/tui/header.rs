use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::DashboardScreenViewModel;

pub struct HeaderView<'a> {
    model: &'a DashboardScreenViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a DashboardScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([Constraint::Min(20), Constraint::Length(36)]).split(area);

        Paragraph::new(Span::styled(
            self.model.title.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .render(chunks[0], buf);

        Paragraph::new(Span::styled(
            format!("Last updated: {}", self.model.last_updated),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right)
        .render(chunks[1], buf);
    }
}
