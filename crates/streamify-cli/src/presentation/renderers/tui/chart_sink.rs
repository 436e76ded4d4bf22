use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::presentation::formatters::{format_axis_value, truncate};
use crate::presentation::renderers::ChartSink;
use crate::presentation::view_models::{ChartPanelViewModel, ChartSeriesViewModel, ChartStyle};
use crate::presentation::views::tui::hex_to_color;

const FALLBACK_COLORS: [Color; 5] = [
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
];

/// Draws one chart panel into a frame region
pub struct FrameChartSink<'a, 'f> {
    frame: &'a mut Frame<'f>,
    area: Rect,
}

impl<'a, 'f> FrameChartSink<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>, area: Rect) -> Self {
        Self { frame, area }
    }

    fn block(panel: &ChartPanelViewModel) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", panel.title))
    }

    fn point_color(series: &ChartSeriesViewModel, index: usize, fallback: usize) -> Color {
        let hex = series
            .colors
            .get(index)
            .or_else(|| series.colors.first())
            .map(String::as_str);
        hex_to_color(hex, FALLBACK_COLORS[fallback % FALLBACK_COLORS.len()])
    }

    fn draw_line(&mut self, panel: &ChartPanelViewModel) {
        let points: Vec<Vec<(f64, f64)>> = panel
            .series
            .iter()
            .map(|s| {
                s.values
                    .iter()
                    .enumerate()
                    .map(|(x, y)| (x as f64, *y))
                    .collect()
            })
            .collect();

        let datasets: Vec<Dataset> = panel
            .series
            .iter()
            .zip(&points)
            .enumerate()
            .map(|(i, (series, data))| {
                Dataset::default()
                    .name(series.name.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(Self::point_color(series, 0, i)))
                    .data(data)
            })
            .collect();

        let x_max = panel.labels.len().saturating_sub(1).max(1) as f64;
        let y_max = panel.max_value * 1.1;
        let x_labels = match (panel.labels.first(), panel.labels.last()) {
            (Some(first), Some(last)) => vec![Span::raw(first.clone()), Span::raw(last.clone())],
            _ => Vec::new(),
        };

        let chart = Chart::new(datasets)
            .block(Self::block(panel))
            .x_axis(
                Axis::default()
                    .bounds([0.0, x_max])
                    .labels(x_labels)
                    .style(Style::default().fg(Color::DarkGray)),
            )
            .y_axis(
                Axis::default()
                    .bounds([0.0, y_max])
                    .labels(vec![
                        Span::raw("0"),
                        Span::raw(format_axis_value(panel.max_value)),
                    ])
                    .style(Style::default().fg(Color::DarkGray)),
            );

        self.frame.render_widget(chart, self.area);
    }

    fn draw_bar(&mut self, panel: &ChartPanelViewModel) {
        let Some(series) = panel.series.first() else {
            return;
        };

        let inner_width = self.area.width.saturating_sub(2) as usize;
        let count = panel.labels.len().max(1);
        let bar_width = (inner_width / count).saturating_sub(1).clamp(1, 12);

        // Bars hold integers; scale so one decimal survives
        let bars: Vec<Bar> = panel
            .labels
            .iter()
            .zip(&series.values)
            .enumerate()
            .map(|(i, (label, value))| {
                Bar::default()
                    .value((value * 10.0).round() as u64)
                    .text_value(format_axis_value(*value))
                    .label(Line::from(truncate(label, bar_width)))
                    .style(Style::default().fg(Self::point_color(series, i, i)))
            })
            .collect();

        let chart = BarChart::default()
            .block(Self::block(panel))
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width as u16)
            .bar_gap(1);

        self.frame.render_widget(chart, self.area);
    }

    fn draw_pie(&mut self, panel: &ChartPanelViewModel) {
        let Some(series) = panel.series.first() else {
            return;
        };

        let label_width = panel
            .labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let bar_room = (self.area.width as usize)
            .saturating_sub(label_width + 10)
            .max(1);

        let lines: Vec<Line> = panel
            .labels
            .iter()
            .zip(&series.values)
            .enumerate()
            .map(|(i, (label, value))| {
                let share = if panel.total > 0.0 {
                    value / panel.total
                } else {
                    0.0
                };
                let len = ((share * bar_room as f64).round() as usize).max(1);
                let color = Self::point_color(series, i, i);
                Line::from(vec![
                    Span::raw(format!("{:<width$} ", label, width = label_width)),
                    Span::styled("█".repeat(len), Style::default().fg(color)),
                    Span::raw(format!(" {:.0}%", share * 100.0)),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(Self::block(panel));
        self.frame.render_widget(paragraph, self.area);
    }
}

impl ChartSink for FrameChartSink<'_, '_> {
    fn draw(&mut self, panel: &ChartPanelViewModel) {
        if !panel.has_data() {
            let empty = Paragraph::new("No data")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(Self::block(panel));
            self.frame.render_widget(empty, self.area);
            return;
        }

        match panel.style {
            ChartStyle::Line => self.draw_line(panel),
            ChartStyle::Bar => self.draw_bar(panel),
            ChartStyle::Pie => self.draw_pie(panel),
        }
    }
}
