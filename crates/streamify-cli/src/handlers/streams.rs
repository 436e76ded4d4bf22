use anyhow::{Context, Result};
use streamify_engine::{ControlEvent, SortRequest, resolve_sort};
use streamify_runtime::Config;

use super::load_context;
use crate::presentation::presenters::present_table;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Renderer, StatusBadge};
use crate::types::SortOrder;

/// Table controls as given on the command line
pub struct StreamsQuery {
    pub search: String,
    pub sort: Option<String>,
    pub order: SortOrder,
    pub page: i64,
    pub per_page: Option<usize>,
}

pub fn handle(config: &Config, query: StreamsQuery, json: bool) -> Result<()> {
    let mut ctx = load_context(config)?;

    // Search and page size both reset to page 1, so the page goes last
    if let Some(size) = query.per_page {
        let options = ctx.controls().page_size_options().clone();
        options.check(size).with_context(|| {
            format!("--per-page must be one of {:?}", options.as_slice())
        })?;
        ctx.dispatch(ControlEvent::PageSizeSelected(size));
    }

    ctx.dispatch(ControlEvent::SearchChanged(query.search));

    let request = query.sort.map(|field| SortRequest {
        field,
        direction: query.order.into(),
    });
    let sort = resolve_sort(request.as_ref());
    if let Some(sort) = sort {
        ctx.dispatch(ControlEvent::SortSelected(sort));
    }

    ctx.dispatch(ControlEvent::PageSelected(query.page));

    let view = ctx.current_view();
    let view_model = present_table(&view, ctx.controls());

    let mut result = CommandResultViewModel::new(view_model);
    if let Some(request) = request.filter(|_| sort.is_none()) {
        result = result.with_badge(StatusBadge::warning(format!(
            "Unknown sort field '{}', showing natural order",
            request.field
        )));
    }

    ConsoleRenderer::new(json).render(result)
}
