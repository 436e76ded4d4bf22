use std::fmt::Write;

use super::traits::ChartSink;
use crate::presentation::formatters::{format_axis_value, pad_right};
use crate::presentation::view_models::{ChartPanelViewModel, ChartStyle};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Draws chart panels as plain text into a buffer
pub struct TextChartSink {
    out: String,
    bar_width: usize,
}

impl TextChartSink {
    pub fn new(bar_width: usize) -> Self {
        Self {
            out: String::new(),
            bar_width,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn bar(&self, value: f64, max: f64) -> String {
        if max <= 0.0 || value <= 0.0 {
            return String::new();
        }
        let len = ((value / max) * self.bar_width as f64).round() as usize;
        "█".repeat(len.clamp(1, self.bar_width))
    }

    fn label_width(panel: &ChartPanelViewModel) -> usize {
        panel
            .labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }

    fn draw_line(&mut self, panel: &ChartPanelViewModel) {
        let span = match (panel.labels.first(), panel.labels.last()) {
            (Some(first), Some(last)) => format!("{}-{}", first, last),
            _ => String::new(),
        };
        let name_width = panel
            .series
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(0);

        for series in &panel.series {
            let spark = sparkline(&series.values, panel.max_value);
            let peak = series.values.iter().copied().fold(0.0, f64::max);
            let _ = writeln!(
                self.out,
                "  {}  {}  {} (peak {})",
                pad_right(&series.name, name_width),
                spark,
                span,
                format_axis_value(peak)
            );
        }
    }

    fn draw_bar(&mut self, panel: &ChartPanelViewModel) {
        let width = Self::label_width(panel);
        let Some(series) = panel.series.first() else {
            return;
        };

        for (label, value) in panel.labels.iter().zip(&series.values) {
            let _ = writeln!(
                self.out,
                "  {}  {} {}",
                pad_right(label, width),
                self.bar(*value, panel.max_value),
                format_axis_value(*value)
            );
        }
    }

    fn draw_pie(&mut self, panel: &ChartPanelViewModel) {
        let width = Self::label_width(panel);
        let Some(series) = panel.series.first() else {
            return;
        };

        for (label, value) in panel.labels.iter().zip(&series.values) {
            let share = if panel.total > 0.0 {
                value / panel.total * 100.0
            } else {
                0.0
            };
            let _ = writeln!(
                self.out,
                "  {}  {} {:.0}%",
                pad_right(label, width),
                self.bar(share, 100.0),
                share
            );
        }
    }
}

impl ChartSink for TextChartSink {
    fn draw(&mut self, panel: &ChartPanelViewModel) {
        let _ = writeln!(self.out, "{}", panel.title);

        if !panel.has_data() {
            let _ = writeln!(self.out, "  (no data)");
            return;
        }

        match panel.style {
            ChartStyle::Line => self.draw_line(panel),
            ChartStyle::Bar => self.draw_bar(panel),
            ChartStyle::Pie => self.draw_pie(panel),
        }
    }
}

fn sparkline(values: &[f64], max: f64) -> String {
    values
        .iter()
        .map(|v| {
            if max <= 0.0 {
                return SPARK_LEVELS[0];
            }
            let idx = ((v / max) * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
            SPARK_LEVELS[idx.min(SPARK_LEVELS.len() - 1)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::ChartSeriesViewModel;

    fn panel(style: ChartStyle, labels: &[&str], values: &[f64]) -> ChartPanelViewModel {
        ChartPanelViewModel {
            title: "Panel".to_string(),
            style,
            labels: labels.iter().map(|s| s.to_string()).collect(),
            series: vec![ChartSeriesViewModel {
                name: "Series".to_string(),
                values: values.to_vec(),
                colors: Vec::new(),
            }],
            max_value: values.iter().copied().fold(0.0, f64::max),
            total: values.iter().sum(),
        }
    }

    #[test]
    fn test_sparkline_scales_to_max() {
        assert_eq!(sparkline(&[0.0, 50.0, 100.0], 100.0), "▁▅█");
        assert_eq!(sparkline(&[1.0], 0.0), "▁");
    }

    #[test]
    fn test_bar_lengths_are_proportional() {
        let mut sink = TextChartSink::new(10);
        sink.draw(&panel(ChartStyle::Bar, &["A", "B"], &[2.0, 1.0]));
        let out = sink.finish();
        assert!(out.contains("A  ██████████ 2"));
        assert!(out.contains("B  █████ 1"));
    }

    #[test]
    fn test_pie_shows_shares() {
        let mut sink = TextChartSink::new(20);
        sink.draw(&panel(ChartStyle::Pie, &["Premium", "Ads"], &[65.0, 35.0]));
        let out = sink.finish();
        assert!(out.contains("65%"));
        assert!(out.contains("35%"));
    }

    #[test]
    fn test_empty_panel() {
        let mut sink = TextChartSink::new(20);
        let mut empty = panel(ChartStyle::Line, &[], &[]);
        empty.series.clear();
        sink.draw(&empty);
        assert_eq!(sink.finish(), "Panel\n  (no data)\n");
    }
}
