use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::{pad_left, pad_right};
use crate::presentation::view_models::{CreateView, StreamTableViewModel};

impl CreateView for StreamTableViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(TableView::new(self))
    }
}

/// Column-aligned stream table with its empty state and pagination footer
pub struct TableView<'a> {
    data: &'a StreamTableViewModel,
}

impl<'a> TableView<'a> {
    pub fn new(data: &'a StreamTableViewModel) -> Self {
        Self { data }
    }

    fn headers(&self) -> Vec<String> {
        self.data
            .columns
            .iter()
            .map(|c| match &c.sort_indicator {
                Some(marker) => format!("{} {}", c.label, marker),
                None => c.label.clone(),
            })
            .collect()
    }

    fn widths(&self, headers: &[String]) -> Vec<usize> {
        headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.data
                    .rows
                    .iter()
                    .map(|r| r.cells()[i].chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn line(&self, cells: &[&str], widths: &[usize]) -> String {
        cells
            .iter()
            .zip(widths)
            .zip(&self.data.columns)
            .map(|((cell, width), column)| {
                if column.numeric {
                    pad_left(cell, *width)
                } else {
                    pad_right(cell, *width)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }
}

impl<'a> fmt::Display for TableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.data.search.is_empty() {
            writeln!(f, "Search: \"{}\"", self.data.search)?;
            writeln!(f)?;
        }

        let headers = self.headers();
        let widths = self.widths(&headers);
        let header_cells: Vec<&str> = headers.iter().map(String::as_str).collect();
        let header = self.line(&header_cells, &widths);
        let rule_len = header.chars().count();

        writeln!(f, "{}", header.bold())?;
        writeln!(f, "{}", "-".repeat(rule_len))?;

        if let Some(message) = &self.data.empty_message {
            writeln!(f, "{}", message)?;
            return Ok(());
        }

        for row in &self.data.rows {
            writeln!(f, "{}", self.line(&row.cells(), &widths))?;
        }

        if let Some(pagination) = &self.data.pagination {
            let pages = pagination
                .pages
                .iter()
                .map(|&p| {
                    if p == pagination.current_page {
                        format!("[{}]", p)
                    } else {
                        p.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");

            writeln!(f)?;
            writeln!(f, "{}", pagination.summary)?;
            writeln!(
                f,
                "Page {} of {}: {}",
                pagination.current_page, pagination.total_pages, pages
            )?;
        }

        Ok(())
    }
}
