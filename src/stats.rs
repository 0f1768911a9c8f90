use serde::Serialize;

use crate::browser::{detect_browser, BrowserCategory};
use crate::record::RawRecord;
use crate::resource::is_image_path;
use crate::timestamp::extract_hour;

pub const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourBucket {
    pub hour: u32,
    pub hits: u64,
}

/// Tallies from one pass over the accepted records.
///
/// `browser_counts` is indexed by `BrowserCategory::index()` and always sums
/// to `total_hits`. `hourly_hits` only counts records whose timestamp parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogStats {
    pub total_hits: u64,
    pub image_hits: u64,
    pub browser_counts: [u64; 5],
    pub hourly_hits: [u64; HOURS_PER_DAY],
}

impl LogStats {
    pub fn from_records(records: &[RawRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, record| {
            acc.record(record);
            acc
        })
    }

    pub fn record(&mut self, record: &RawRecord) {
        self.total_hits += 1;

        if is_image_path(&record.path) {
            self.image_hits += 1;
        }

        self.browser_counts[detect_browser(&record.user_agent).index()] += 1;

        if let Some(hour) = extract_hour(&record.timestamp_raw) {
            self.hourly_hits[hour as usize] += 1;
        }
    }

    pub fn browser_count(&self, category: BrowserCategory) -> u64 {
        self.browser_counts[category.index()]
    }

    /// Records that landed in an hour bucket.
    pub fn timed_hits(&self) -> u64 {
        self.hourly_hits.iter().sum()
    }

    /// Share of image requests in percent, unrounded. Empty input gives `0.0`.
    pub fn image_percentage(&self) -> f64 {
        if self.total_hits == 0 {
            return 0.0;
        }
        self.image_hits as f64 / self.total_hits as f64 * 100.0
    }

    /// `image_percentage` to one decimal, rounded the way `{:.1}` prints it
    /// (ties on the exact binary value go to even).
    pub fn rounded_image_percentage(&self) -> f64 {
        format!("{:.1}", self.image_percentage())
            .parse()
            .unwrap_or(0.0)
    }

    /// Highest count among the named browsers; `Other` never wins. Ties go to
    /// the earliest of Firefox, Chrome, Internet Explorer, Safari, so an empty
    /// log reports Firefox.
    pub fn most_popular_browser(&self) -> BrowserCategory {
        let mut best = BrowserCategory::NAMED[0];
        for category in BrowserCategory::NAMED.into_iter().skip(1) {
            if self.browser_count(category) > self.browser_count(best) {
                best = category;
            }
        }
        best
    }

    /// All 24 buckets, busiest first. Equal counts keep ascending hour order.
    pub fn ranked_hours(&self) -> Vec<HourBucket> {
        let mut buckets: Vec<HourBucket> = self
            .hourly_hits
            .iter()
            .enumerate()
            .map(|(hour, &hits)| HourBucket {
                hour: hour as u32,
                hits,
            })
            .collect();
        buckets.sort_by(|a, b| b.hits.cmp(&a.hits));
        buckets
    }
}
