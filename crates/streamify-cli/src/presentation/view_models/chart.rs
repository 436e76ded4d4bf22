use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    Line,
    Bar,
    Pie,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSeriesViewModel {
    pub name: String,
    pub values: Vec<f64>,
    /// One `#rrggbb` color per value; a single entry colors the whole series
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartPanelViewModel {
    pub title: String,
    pub style: ChartStyle,
    pub labels: Vec<String>,
    pub series: Vec<ChartSeriesViewModel>,
    /// Largest value across all series, used for axis bounds
    pub max_value: f64,
    /// Sum of the first series, used for pie shares
    pub total: f64,
}

impl ChartPanelViewModel {
    pub fn has_data(&self) -> bool {
        self.series.iter().any(|s| !s.values.is_empty())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartsViewModel {
    pub panels: Vec<ChartPanelViewModel>,
}
