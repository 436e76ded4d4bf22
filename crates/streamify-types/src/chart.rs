use serde::{Deserialize, Serialize};
use std::fmt;

/// How a chart collaborator should draw a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Line => write!(f, "line"),
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Pie => write!(f, "pie"),
        }
    }
}

/// One named series of values, aligned with `ChartData::labels`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub values: Vec<f64>,
    /// Hex colors, either one for the whole series or one per value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

impl ChartSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            name: None,
            values,
            colors: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Color for the value at `index`, falling back to the series color
    pub fn color_at(&self, index: usize) -> Option<&str> {
        let colors = self.colors.as_ref()?;
        colors
            .get(index)
            .or_else(|| colors.first())
            .map(String::as_str)
    }
}

/// Labeled-series structure accepted by chart collaborators
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            series: Vec::new(),
        }
    }

    pub fn with_series(mut self, series: ChartSeries) -> Self {
        self.series.push(series);
        self
    }

    /// Largest value across all series (0.0 when there is none)
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_at_falls_back_to_series_color() {
        let series = ChartSeries::new(vec![1.0, 2.0]).with_colors(["#3b82f6"]);
        assert_eq!(series.color_at(0), Some("#3b82f6"));
        assert_eq!(series.color_at(1), Some("#3b82f6"));
        assert_eq!(ChartSeries::new(vec![1.0]).color_at(0), None);
    }

    #[test]
    fn test_max_value_across_series() {
        let data = ChartData::new(["a", "b"])
            .with_series(ChartSeries::new(vec![1.0, 4.0]))
            .with_series(ChartSeries::new(vec![3.0, 2.0]));
        assert_eq!(data.max_value(), 4.0);
        assert_eq!(ChartData::default().max_value(), 0.0);
    }
}
