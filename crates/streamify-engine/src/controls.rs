//! Table control state and its transitions.
//!
//! The presentation layer turns user input into `ControlEvent`s; `TableControls`
//! applies them and enforces the reset rules (new search or new page size goes
//! back to page 1). Composition itself stays a pure function of this state.

use serde::Serialize;
use streamify_types::{
    PageSizeOptions, PageState, Result, SearchQuery, SortField, SortState, StreamRecord,
};

use crate::view::{self, DerivedView};

/// User intents that change what the table shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// Replace the whole search query
    SearchChanged(String),
    /// Append one typed character
    SearchInput(char),
    SearchBackspace,
    SearchCleared,
    /// Header click: same field flips direction, another field sorts ascending
    SortToggled(SortField),
    /// Set field and direction directly
    SortSelected(SortState),
    SortCleared,
    PageSelected(i64),
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    PageSizeSelected(usize),
    /// Step to the next allowed page size, wrapping around
    PageSizeCycled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableControls {
    search: SearchQuery,
    sort: Option<SortState>,
    page: PageState,
    #[serde(skip)]
    page_size_options: PageSizeOptions,
}

impl TableControls {
    /// Start on page 1 with the smallest allowed page size
    pub fn new(page_size_options: PageSizeOptions) -> Self {
        let size = page_size_options.first();
        Self {
            search: SearchQuery::default(),
            sort: None,
            page: PageState::first(size),
            page_size_options,
        }
    }

    pub fn with_page_size(page_size_options: PageSizeOptions, size: usize) -> Result<Self> {
        let size = page_size_options.check(size)?;
        let mut controls = Self::new(page_size_options);
        controls.page = PageState::first(size);
        Ok(controls)
    }

    pub fn search(&self) -> &SearchQuery {
        &self.search
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn page_size_options(&self) -> &PageSizeOptions {
        &self.page_size_options
    }

    /// Apply one event; returns whether any control state changed
    pub fn apply(&mut self, event: ControlEvent) -> bool {
        tracing::debug!(?event, "control event");

        match event {
            ControlEvent::SearchChanged(query) => {
                if self.search.as_str() == query {
                    return false;
                }
                self.search = SearchQuery::new(query);
                self.reset_page();
                true
            }
            ControlEvent::SearchInput(c) => {
                self.search.push(c);
                self.reset_page();
                true
            }
            ControlEvent::SearchBackspace => {
                if !self.search.pop() {
                    return false;
                }
                self.reset_page();
                true
            }
            ControlEvent::SearchCleared => {
                if self.search.is_empty() {
                    return false;
                }
                self.search.clear();
                self.reset_page();
                true
            }
            ControlEvent::SortToggled(field) => {
                self.sort = Some(match self.sort {
                    Some(current) if current.field == field => {
                        SortState::new(field, current.direction.toggled())
                    }
                    _ => SortState::ascending(field),
                });
                true
            }
            ControlEvent::SortSelected(sort) => {
                if self.sort == Some(sort) {
                    return false;
                }
                self.sort = Some(sort);
                true
            }
            ControlEvent::SortCleared => self.sort.take().is_some(),
            ControlEvent::PageSelected(number) => self.set_page_number(number),
            ControlEvent::NextPage => self.set_page_number(self.page.number.saturating_add(1)),
            ControlEvent::PreviousPage => {
                self.set_page_number(self.page.number.saturating_sub(1).max(1))
            }
            ControlEvent::FirstPage => self.set_page_number(1),
            // Clamped to the real last page on the next compose
            ControlEvent::LastPage => self.set_page_number(i64::MAX),
            ControlEvent::PageSizeSelected(size) => {
                if !self.page_size_options.contains(size) {
                    tracing::warn!(
                        size,
                        allowed = ?self.page_size_options.as_slice(),
                        "ignoring page size outside the allowed options"
                    );
                    return false;
                }
                if size == self.page.size {
                    return false;
                }
                self.page = PageState::first(size);
                true
            }
            ControlEvent::PageSizeCycled => {
                let size = self.page_size_options.cycle_from(self.page.size);
                if size == self.page.size {
                    return false;
                }
                self.page = PageState::first(size);
                true
            }
        }
    }

    /// Compose the view for the current control state without touching it
    pub fn compose<'a>(&self, records: &'a [StreamRecord]) -> DerivedView<'a> {
        view::compose(records, &self.search, self.sort, self.page)
    }

    /// Store the page the composer actually showed, so later relative moves
    /// (next/previous) start from an in-range page.
    pub fn sync_page(&mut self, view: &DerivedView<'_>) {
        let clamped = i64::try_from(view.page).unwrap_or(i64::MAX);
        if self.page.number != clamped {
            tracing::debug!(from = self.page.number, to = clamped, "re-clamped page");
            self.page.number = clamped;
        }
    }

    /// Compose and re-clamp in one step
    pub fn view<'a>(&mut self, records: &'a [StreamRecord]) -> DerivedView<'a> {
        let view = self.compose(records);
        self.sync_page(&view);
        view
    }

    fn set_page_number(&mut self, number: i64) -> bool {
        if self.page.number == number {
            return false;
        }
        self.page.number = number;
        true
    }

    fn reset_page(&mut self) {
        self.page.number = 1;
    }
}

impl Default for TableControls {
    fn default() -> Self {
        Self::new(PageSizeOptions::default())
    }
}
