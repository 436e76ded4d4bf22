use std::collections::HashSet;
use std::sync::Arc;
use streamify_types::{DashboardCharts, DashboardMetrics, StreamRecord};

use crate::{Error, Result};

/// Canonical, unfiltered dashboard data.
///
/// Records sit behind an `Arc<[_]>`: replacing them swaps the whole slice in
/// one assignment, so a snapshot taken earlier never sees a half-updated
/// collection.
#[derive(Debug, Clone)]
pub struct RecordStore {
    streams: Arc<[StreamRecord]>,
    metrics: Option<DashboardMetrics>,
    charts: DashboardCharts,
}

impl RecordStore {
    pub fn new(
        streams: Vec<StreamRecord>,
        metrics: Option<DashboardMetrics>,
        charts: DashboardCharts,
    ) -> Result<Self> {
        ensure_unique_ids(&streams)?;
        Ok(Self {
            streams: streams.into(),
            metrics,
            charts,
        })
    }

    pub fn empty() -> Self {
        Self {
            streams: Arc::from(Vec::new()),
            metrics: None,
            charts: DashboardCharts::default(),
        }
    }

    pub fn records(&self) -> &[StreamRecord] {
        &self.streams
    }

    /// Shared handle to the current collection
    pub fn snapshot(&self) -> Arc<[StreamRecord]> {
        Arc::clone(&self.streams)
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    pub fn metrics(&self) -> Option<&DashboardMetrics> {
        self.metrics.as_ref()
    }

    pub fn charts(&self) -> &DashboardCharts {
        &self.charts
    }

    /// Publish a complete new collection. On error the old one stays in place.
    pub fn replace_streams(&mut self, streams: Vec<StreamRecord>) -> Result<()> {
        ensure_unique_ids(&streams)?;
        tracing::info!(
            previous = self.streams.len(),
            current = streams.len(),
            "replacing stream records"
        );
        self.streams = streams.into();
        Ok(())
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::empty()
    }
}

fn ensure_unique_ids(streams: &[StreamRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(streams.len());
    for record in streams {
        if !seen.insert(record.id.as_str()) {
            return Err(Error::DuplicateRecordId(record.id.to_string()));
        }
    }
    Ok(())
}
