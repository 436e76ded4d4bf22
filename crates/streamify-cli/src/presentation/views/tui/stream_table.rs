use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use crate::presentation::view_models::{PaginationViewModel, StreamTableViewModel};

const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Percentage(24),
    Constraint::Percentage(28),
    Constraint::Percentage(16),
    Constraint::Percentage(16),
    Constraint::Percentage(16),
];

/// Search line, sortable table (or empty state) and pagination footer
pub struct StreamTableView<'a> {
    model: &'a StreamTableViewModel,
    searching: bool,
}

impl<'a> StreamTableView<'a> {
    pub fn new(model: &'a StreamTableViewModel, searching: bool) -> Self {
        Self { model, searching }
    }

    fn search_line(&self) -> Line<'a> {
        let label_style = if self.searching {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = vec![Span::styled("Search: ", label_style)];
        if self.model.search.is_empty() && !self.searching {
            spans.push(Span::styled(
                "press / to filter by song or artist",
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(self.model.search.as_str()));
        }
        if self.searching {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    }

    fn table(&self) -> Table<'a> {
        let header = Row::new(self.model.columns.iter().map(|c| {
            let text = match &c.sort_indicator {
                Some(marker) => format!("{} {}", c.label, marker),
                None => c.label.clone(),
            };
            let style = if c.sort_indicator.is_some() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Cell::from(text).style(style)
        }));

        let rows = self.model.rows.iter().map(|r| {
            Row::new(
                r.cells()
                    .into_iter()
                    .map(|cell| Cell::from(cell.to_string()))
                    .collect::<Vec<_>>(),
            )
        });

        Table::new(rows, COLUMN_WIDTHS)
            .header(header)
            .column_spacing(1)
    }
}

fn footer_line(pagination: &PaginationViewModel) -> Line<'_> {
    let mut spans = vec![Span::raw(pagination.summary.as_str()), Span::raw("   ")];

    let arrow_style = |enabled: bool| {
        if enabled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    spans.push(Span::styled("‹ ", arrow_style(pagination.has_previous)));
    for page in &pagination.pages {
        let style = if *page == pagination.current_page {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {} ", page), style));
    }
    spans.push(Span::styled(" ›", arrow_style(pagination.has_next)));

    Line::from(spans)
}

impl<'a> Widget for StreamTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(format!(
            " Streams · {} per page ",
            self.model.page_size
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let footer_height = if self.model.pagination.is_some() { 1 } else { 0 };
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(footer_height),
        ])
        .split(inner);

        Paragraph::new(self.search_line()).render(chunks[0], buf);

        if let Some(message) = &self.model.empty_message {
            Paragraph::new(message.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .render(chunks[2], buf);
        } else {
            Widget::render(self.table(), chunks[2], buf);
        }

        if let Some(pagination) = &self.model.pagination {
            Paragraph::new(footer_line(pagination)).render(chunks[3], buf);
        }
    }
}
