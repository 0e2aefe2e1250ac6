use crate::access_log::types::LogEvent;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

pub type Counts = BTreeMap<String, u64>;

/// Running totals over every event of one log.
///
/// Ordered maps keep iteration deterministic, which the ranking tie-break and the
/// "first address wins" rule of geo enrichment both rely on.
#[derive(Debug, Default, Clone)]
pub struct Aggregates {
    total_hits: u64,
    total_bytes: u64,
    hits_by_day: BTreeMap<NaiveDate, u64>,
    bytes_by_day: BTreeMap<NaiveDate, u64>,
    hits_by_address: Counts,
    hits_by_status: Counts,
    hits_by_day_and_address: BTreeMap<NaiveDate, Counts>,
    hits_by_day_and_status: BTreeMap<NaiveDate, Counts>,
    observed_days: BTreeSet<NaiveDate>,
}

/// Per-day nested counters, borrowed from [`Aggregates`].
pub(crate) struct DayBucket<'a> {
    pub by_address: &'a mut Counts,
    pub by_status: &'a mut Counts,
}

impl Aggregates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest(&mut self, event: &LogEvent) {
        let day = event.day;

        self.observed_days.insert(day);

        self.total_hits += 1;
        *self.hits_by_day.entry(day).or_insert(0) += 1;

        if let Some(bytes) = event.byte_count {
            self.total_bytes = self.total_bytes.saturating_add(bytes);
            let day_bytes = self.bytes_by_day.entry(day).or_insert(0);
            *day_bytes = day_bytes.saturating_add(bytes);
        }

        let bucket = self.day_bucket(day);
        *bucket.by_address.entry(event.address.clone()).or_insert(0) += 1;
        *bucket.by_status.entry(event.status_code.clone()).or_insert(0) += 1;

        *self
            .hits_by_address
            .entry(event.address.clone())
            .or_insert(0) += 1;
        *self
            .hits_by_status
            .entry(event.status_code.clone())
            .or_insert(0) += 1;
    }

    /// Get-or-create both nested maps for `day`.
    ///
    /// This is the only place nested maps are created, so a day key never points at a
    /// missing map.
    pub(crate) fn day_bucket(&mut self, day: NaiveDate) -> DayBucket<'_> {
        DayBucket {
            by_address: self.hits_by_day_and_address.entry(day).or_default(),
            by_status: self.hits_by_day_and_status.entry(day).or_default(),
        }
    }

    pub fn total_hits(&self) -> u64 {
        self.total_hits
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn hits_by_day(&self) -> &BTreeMap<NaiveDate, u64> {
        &self.hits_by_day
    }

    pub fn bytes_by_day(&self) -> &BTreeMap<NaiveDate, u64> {
        &self.bytes_by_day
    }

    pub fn hits_by_address(&self) -> &Counts {
        &self.hits_by_address
    }

    pub fn hits_by_status(&self) -> &Counts {
        &self.hits_by_status
    }

    pub fn hits_by_day_and_address(&self) -> &BTreeMap<NaiveDate, Counts> {
        &self.hits_by_day_and_address
    }

    pub fn hits_by_day_and_status(&self) -> &BTreeMap<NaiveDate, Counts> {
        &self.hits_by_day_and_status
    }

    pub fn observed_days(&self) -> &BTreeSet<NaiveDate> {
        &self.observed_days
    }

    pub fn is_empty(&self) -> bool {
        self.total_hits == 0
    }
}
