use chrono::{DateTime, Utc};
use streamify_engine::{ControlEvent, DerivedView, TableControls};
use streamify_types::StreamRecord;

use crate::mock::{self, MockGenerator};
use crate::{Config, RecordStore, Result};

/// Everything the dashboard needs for one session: the record store and the
/// table control state. Passed explicitly to presenters and renderers.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    store: RecordStore,
    controls: TableControls,
}

impl DashboardContext {
    pub fn new(store: RecordStore, controls: TableControls) -> Self {
        Self { store, controls }
    }

    /// Build a session from configuration, generating mock data anchored at `now`
    pub fn bootstrap(config: &Config, now: DateTime<Utc>) -> Result<Self> {
        config.validate()?;

        let mut generator = MockGenerator::new(config.mock.seed, now);
        let streams = generator.streams(config.mock.stream_count);
        let charts = generator.charts();
        let store = RecordStore::new(streams, Some(mock::metrics()), charts)?;

        let controls = TableControls::with_page_size(
            config.table.page_size_options.clone(),
            config.table.default_page_size,
        )?;

        Ok(Self::new(store, controls))
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn controls(&self) -> &TableControls {
        &self.controls
    }

    /// Apply a user intent and re-clamp the stored page against the data.
    ///
    /// Returns whether the control state differs afterwards, so a next-page
    /// press on the last page reports no change.
    pub fn dispatch(&mut self, event: ControlEvent) -> bool {
        let before = self.controls.clone();
        if !self.controls.apply(event) {
            return false;
        }
        self.resync();
        self.controls != before
    }

    /// The visible page for the current control state
    pub fn current_view(&self) -> DerivedView<'_> {
        self.controls.compose(self.store.records())
    }

    pub fn replace_streams(&mut self, streams: Vec<StreamRecord>) -> Result<()> {
        self.store.replace_streams(streams)?;
        self.resync();
        Ok(())
    }

    // Keeps next/previous moves relative to a page that actually exists
    fn resync(&mut self) {
        let view = self.controls.compose(self.store.records());
        self.controls.sync_page(&view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use streamify_types::{PageSizeOptions, SortField};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    fn seeded(count: usize) -> Config {
        let mut config = Config::default();
        config.mock.seed = Some(11);
        config.mock.stream_count = count;
        config
    }

    #[test]
    fn test_bootstrap_uses_config() -> Result<()> {
        let mut config = seeded(42);
        config.table.default_page_size = 25;

        let ctx = DashboardContext::bootstrap(&config, now())?;
        assert_eq!(ctx.store().len(), 42);
        assert!(ctx.store().metrics().is_some());
        assert!(ctx.store().charts().top_songs.is_some());

        let view = ctx.current_view();
        assert_eq!(view.page_size, 25);
        assert_eq!(view.total_pages, 2);
        Ok(())
    }

    #[test]
    fn test_bootstrap_rejects_bad_default_size() {
        let mut config = seeded(5);
        config.table.page_size_options = PageSizeOptions::new(vec![10]).unwrap();
        config.table.default_page_size = 25;
        assert!(DashboardContext::bootstrap(&config, now()).is_err());
    }

    #[test]
    fn test_replacement_reclamps_page() -> Result<()> {
        let mut ctx = DashboardContext::bootstrap(&seeded(100), now())?;
        ctx.dispatch(ControlEvent::LastPage);
        assert_eq!(ctx.current_view().page, 10);
        assert_eq!(ctx.controls().page().number, 10);

        let fewer = ctx.store().records()[..15].to_vec();
        ctx.replace_streams(fewer)?;

        let view = ctx.current_view();
        assert_eq!(view.page, 2);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(ctx.controls().page().number, 2);
        Ok(())
    }

    #[test]
    fn test_next_page_past_end_stays_on_last() -> Result<()> {
        let mut ctx = DashboardContext::bootstrap(&seeded(25), now())?;
        ctx.dispatch(ControlEvent::PageSelected(3));
        ctx.dispatch(ControlEvent::NextPage);
        ctx.dispatch(ControlEvent::NextPage);
        assert_eq!(ctx.controls().page().number, 3);

        ctx.dispatch(ControlEvent::PreviousPage);
        assert_eq!(ctx.current_view().page, 2);
        Ok(())
    }

    #[test]
    fn test_dispatch_reports_no_change_when_clamped_back() -> Result<()> {
        let mut ctx = DashboardContext::bootstrap(&seeded(25), now())?;
        assert!(ctx.dispatch(ControlEvent::LastPage));
        assert_eq!(ctx.controls().page().number, 3);

        assert!(!ctx.dispatch(ControlEvent::NextPage));
        assert!(!ctx.dispatch(ControlEvent::LastPage));
        assert_eq!(ctx.controls().page().number, 3);

        assert!(ctx.dispatch(ControlEvent::PreviousPage));
        assert!(ctx.dispatch(ControlEvent::FirstPage));
        assert!(!ctx.dispatch(ControlEvent::PreviousPage));
        Ok(())
    }

    #[test]
    fn test_dispatch_sort_then_view() -> Result<()> {
        let mut ctx = DashboardContext::bootstrap(&seeded(30), now())?;
        ctx.dispatch(ControlEvent::SortToggled(SortField::StreamCount));
        ctx.dispatch(ControlEvent::SortToggled(SortField::StreamCount));

        let view = ctx.current_view();
        let counts: Vec<u64> = view.rows.iter().map(|r| r.stream_count).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        Ok(())
    }
}
