//! Mock data for the dashboard.
//!
//! Values are random but the shape is fixed: the same seed and anchor time
//! always produce the same records and series.

use chrono::{DateTime, Datelike, Duration, Months, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use streamify_types::{
    ChartData, ChartSeries, DashboardCharts, DashboardMetrics, MetricChanges, StreamRecord,
};

/// (song, artist) pairs streams are drawn from
pub const CATALOG: [(&str, &str); 5] = [
    ("Shape of You", "Ed Sheeran"),
    ("Blinding Lights", "The Weeknd"),
    ("Dance Monkey", "Tones and I"),
    ("Someone Like You", "Adele"),
    ("Uptown Funk", "Mark Ronson ft. Bruno Mars"),
];

const PALETTE: [&str; 5] = ["#3b82f6", "#10b981", "#f59e0b", "#6366f1", "#ec4899"];

const MONTHS: usize = 12;
const MAX_AGE_DAYS: i64 = 30;
const MIN_STREAM_COUNT: u64 = 100_000;
const STREAM_COUNT_SPREAD: u64 = 1_000_000;
const USER_POOL: u32 = 1_000;

pub struct MockGenerator {
    rng: StdRng,
    anchor: DateTime<Utc>,
}

impl MockGenerator {
    /// `anchor` is "now" for generated timestamps and month labels
    pub fn new(seed: Option<u64>, anchor: DateTime<Utc>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng, anchor }
    }

    pub fn streams(&mut self, count: usize) -> Vec<StreamRecord> {
        tracing::info!(count, "generating mock streams");

        (0..count)
            .map(|i| {
                let (song, artist) = CATALOG[self.rng.random_range(0..CATALOG.len())];
                let age = Duration::days(self.rng.random_range(0..MAX_AGE_DAYS));
                let stream_count =
                    self.rng.random_range(0..STREAM_COUNT_SPREAD) + MIN_STREAM_COUNT;
                let user = self.rng.random_range(0..USER_POOL);

                StreamRecord::new(
                    format!("stream-{}", i),
                    song,
                    artist,
                    self.anchor - age,
                    stream_count,
                    format!("user-{}", user),
                )
            })
            .collect()
    }

    /// Total and active users over the last twelve months, oldest first
    pub fn user_growth(&mut self) -> ChartData {
        let labels = month_labels(self.anchor);

        let total: Vec<f64> = (0..MONTHS)
            .map(|i| (100_000 + i as u64 * 15_000 + self.rng.random_range(0..5_000)) as f64)
            .collect();
        let active: Vec<f64> = total
            .iter()
            .map(|t| (t * (0.6 + self.rng.random::<f64>() * 0.2)).floor())
            .collect();

        ChartData::new(labels)
            .with_series(
                ChartSeries::new(total)
                    .named("Total Users")
                    .with_colors([PALETTE[0]]),
            )
            .with_series(
                ChartSeries::new(active)
                    .named("Active Users")
                    .with_colors([PALETTE[1]]),
            )
    }

    pub fn charts(&mut self) -> DashboardCharts {
        DashboardCharts {
            user_growth: Some(self.user_growth()),
            top_songs: Some(top_songs()),
            revenue_distribution: Some(revenue_distribution()),
        }
    }
}

pub fn top_songs() -> ChartData {
    ChartData::new(CATALOG.iter().map(|(song, _)| *song)).with_series(
        ChartSeries::new(vec![2.8, 2.3, 2.1, 1.9, 1.7])
            .named("Streams (millions)")
            .with_colors(PALETTE),
    )
}

pub fn revenue_distribution() -> ChartData {
    ChartData::new([
        "Premium Subscriptions",
        "Advertisements",
        "Merchandise",
        "Partnerships",
    ])
    .with_series(
        ChartSeries::new(vec![65.0, 20.0, 10.0, 5.0]).with_colors(PALETTE[..4].iter().copied()),
    )
}

pub fn metrics() -> DashboardMetrics {
    DashboardMetrics {
        total_users: 215_000,
        active_users: 142_000,
        total_streams: "1.2M".to_string(),
        revenue: "$2.4M".to_string(),
        top_artist: "Ed Sheeran".to_string(),
        changes: MetricChanges {
            total_users: 12.5,
            active_users: 8.2,
            total_streams: 15.3,
            revenue: 22.4,
        },
    }
}

/// Short month names for the twelve months ending at `anchor`
fn month_labels(anchor: DateTime<Utc>) -> Vec<String> {
    let first_of_month = anchor
        .date_naive()
        .with_day(1)
        .unwrap_or_else(|| anchor.date_naive());

    (0..MONTHS as u32)
        .rev()
        .map(|back| {
            first_of_month
                .checked_sub_months(Months::new(back))
                .unwrap_or(first_of_month)
                .format("%b")
                .to_string()
        })
        .collect()
}
