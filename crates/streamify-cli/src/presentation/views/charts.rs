use std::fmt;

use crate::presentation::renderers::{ChartSink, TextChartSink};
use crate::presentation::view_models::{ChartsViewModel, CreateView};

const BAR_WIDTH: usize = 30;

impl CreateView for ChartsViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ChartsView { data: self })
    }
}

struct ChartsView<'a> {
    data: &'a ChartsViewModel,
}

impl<'a> fmt::Display for ChartsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, panel) in self.data.panels.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let mut sink = TextChartSink::new(BAR_WIDTH);
            sink.draw(panel);
            write!(f, "{}", sink.finish())?;
        }
        Ok(())
    }
}
