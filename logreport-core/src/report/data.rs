use crate::access_log::{Aggregates, Counts};
use crate::enrichment::geoip::PlaceStats;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything the report template sees.
#[derive(Debug, Serialize)]
pub struct ReportData<'a> {
    pub meta: ReportMeta,

    pub days: Vec<NaiveDate>,
    /// One row per observed day, oldest first
    pub daily: Vec<DailyRow>,
    pub hit_total: u64,
    pub bytes_total: u64,

    pub visitors_total: &'a Counts,
    pub status_total: &'a Counts,

    pub hit_days: &'a BTreeMap<NaiveDate, u64>,
    pub bytes_days: &'a BTreeMap<NaiveDate, u64>,
    pub visitors_days: &'a BTreeMap<NaiveDate, Counts>,
    pub status_days: &'a BTreeMap<NaiveDate, Counts>,

    pub region_total: &'a BTreeMap<String, u64>,
    /// `[longitude, latitude]` per place
    pub region_location: &'a BTreeMap<String, (f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRow {
    pub day: NaiveDate,
    pub hits: u64,
    pub bytes: u64,
    pub visitors: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportMeta {
    pub source: String,
    pub generated_at: String,
    pub lines_read: u64,
    pub lines_skipped: u64,
}

impl<'a> ReportData<'a> {
    pub fn new(aggregates: &'a Aggregates, places: &'a PlaceStats, meta: ReportMeta) -> Self {
        Self {
            meta,
            days: aggregates.observed_days().iter().copied().collect(),
            daily: daily_rows(aggregates),
            hit_total: aggregates.total_hits(),
            bytes_total: aggregates.total_bytes(),
            visitors_total: aggregates.hits_by_address(),
            status_total: aggregates.hits_by_status(),
            hit_days: aggregates.hits_by_day(),
            bytes_days: aggregates.bytes_by_day(),
            visitors_days: aggregates.hits_by_day_and_address(),
            status_days: aggregates.hits_by_day_and_status(),
            region_total: &places.hits_by_place,
            region_location: &places.location_by_place,
        }
    }
}

fn daily_rows(aggregates: &Aggregates) -> Vec<DailyRow> {
    aggregates
        .observed_days()
        .iter()
        .map(|day| DailyRow {
            day: *day,
            hits: aggregates.hits_by_day().get(day).copied().unwrap_or(0),
            bytes: aggregates.bytes_by_day().get(day).copied().unwrap_or(0),
            visitors: aggregates
                .hits_by_day_and_address()
                .get(day)
                .map_or(0, |by_address| by_address.len()),
        })
        .collect()
}
