use super::record;
use crate::access_log::{Aggregates, LogEvent, parse_line, unparsed_day};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn event(day: NaiveDate, address: &str, status: &str, bytes: Option<u64>) -> LogEvent {
    LogEvent {
        day,
        address: address.into(),
        status_code: status.into(),
        byte_count: bytes,
    }
}

fn assert_consistent(agg: &Aggregates) {
    let total = agg.total_hits();
    assert_eq!(agg.hits_by_day().values().sum::<u64>(), total);
    assert_eq!(agg.hits_by_address().values().sum::<u64>(), total);
    assert_eq!(agg.hits_by_status().values().sum::<u64>(), total);

    for (day, hits) in agg.hits_by_day() {
        assert_eq!(
            agg.hits_by_day_and_address()[day].values().sum::<u64>(),
            *hits,
            "address hits for {day}"
        );
        assert_eq!(
            agg.hits_by_day_and_status()[day].values().sum::<u64>(),
            *hits,
            "status hits for {day}"
        );
    }

    for day in agg.observed_days() {
        assert!(agg.hits_by_day_and_address().contains_key(day));
        assert!(agg.hits_by_day_and_status().contains_key(day));
    }
}

#[test]
fn ingest_single_record() {
    // Arrange
    let mut agg = Aggregates::new();
    let line = record("1.1.1.1", "10/Oct/2020:13:55:36", "200", "512");

    // Act
    agg.ingest(&parse_line(&line).unwrap());

    // Assert
    let d = day(2020, 10, 10);
    assert_eq!(agg.total_hits(), 1);
    assert_eq!(agg.total_bytes(), 512);
    assert_eq!(agg.hits_by_day()[&d], 1);
    assert_eq!(agg.bytes_by_day()[&d], 512);
    assert_eq!(agg.hits_by_address()["1.1.1.1"], 1);
    assert_eq!(agg.hits_by_status()["200"], 1);
    assert_eq!(agg.hits_by_day_and_address()[&d]["1.1.1.1"], 1);
    assert_eq!(agg.hits_by_day_and_status()[&d]["200"], 1);
    assert!(agg.observed_days().contains(&d));
    assert_consistent(&agg);
}

#[test]
fn ingest_same_day_same_address_different_status() {
    // Arrange
    let mut agg = Aggregates::new();
    let d = day(2020, 10, 10);

    // Act
    agg.ingest(&event(d, "1.1.1.1", "200", Some(10)));
    agg.ingest(&event(d, "1.1.1.1", "404", Some(20)));

    // Assert
    assert_eq!(agg.hits_by_day()[&d], 2);
    assert_eq!(agg.hits_by_address()["1.1.1.1"], 2);
    assert_eq!(agg.hits_by_status()["200"], 1);
    assert_eq!(agg.hits_by_status()["404"], 1);
    assert_eq!(agg.hits_by_day_and_status()[&d]["200"], 1);
    assert_eq!(agg.hits_by_day_and_status()[&d]["404"], 1);
    assert_eq!(agg.bytes_by_day()[&d], 30);
    assert_consistent(&agg);
}

#[test]
fn ingest_invalid_byte_count_still_counts_hit() {
    // Arrange
    let mut agg = Aggregates::new();
    let d = day(2020, 10, 10);
    agg.ingest(&event(d, "1.1.1.1", "200", Some(100)));

    // Act
    agg.ingest(&event(d, "2.2.2.2", "304", None));

    // Assert
    assert_eq!(agg.total_bytes(), 100);
    assert_eq!(agg.bytes_by_day()[&d], 100);
    assert_eq!(agg.total_hits(), 2);
    assert_eq!(agg.hits_by_address()["2.2.2.2"], 1);
    assert_consistent(&agg);
}

#[test]
fn ingest_without_any_bytes_leaves_day_bytes_absent() {
    let mut agg = Aggregates::new();
    let d = day(2020, 10, 10);

    agg.ingest(&event(d, "1.1.1.1", "304", None));

    assert_eq!(agg.bytes_by_day().get(&d), None);
    assert_eq!(agg.hits_by_day()[&d], 1);
}

#[test]
fn ingest_placeholder_day_creates_nested_maps() {
    // Arrange
    let mut agg = Aggregates::new();
    let line = record("1.1.1.1", "garbage", "500", "1");

    // Act
    agg.ingest(&parse_line(&line).unwrap());

    // Assert
    let d = unparsed_day();
    assert!(agg.observed_days().contains(&d));
    assert_eq!(agg.hits_by_day_and_address()[&d]["1.1.1.1"], 1);
    assert_eq!(agg.hits_by_day_and_status()[&d]["500"], 1);
    assert_consistent(&agg);
}

#[test]
fn ingest_across_days_keeps_per_day_totals_consistent() {
    // Arrange
    let mut agg = Aggregates::new();
    let events = [
        event(day(2024, 3, 1), "10.0.0.1", "200", Some(1)),
        event(day(2024, 3, 1), "10.0.0.2", "200", Some(2)),
        event(day(2024, 3, 2), "10.0.0.1", "502", None),
        event(day(2024, 3, 2), "10.0.0.3", "200", Some(4)),
        event(day(2024, 3, 3), "10.0.0.1", "404", Some(8)),
    ];

    // Act
    for e in &events {
        agg.ingest(e);
    }

    // Assert
    assert_eq!(agg.total_hits(), 5);
    assert_eq!(agg.total_bytes(), 15);
    assert_eq!(
        agg.hits_by_address(),
        &BTreeMap::from([
            ("10.0.0.1".to_string(), 3),
            ("10.0.0.2".to_string(), 1),
            ("10.0.0.3".to_string(), 1),
        ])
    );
    assert_eq!(
        agg.observed_days().iter().copied().collect::<Vec<_>>(),
        vec![day(2024, 3, 1), day(2024, 3, 2), day(2024, 3, 3)]
    );
    assert_eq!(agg.bytes_by_day()[&day(2024, 3, 2)], 4);
    assert_consistent(&agg);
}

#[test]
fn day_bucket_is_created_once() {
    let mut agg = Aggregates::new();
    let d = day(2024, 3, 1);

    agg.day_bucket(d).by_address.insert("x".into(), 7);
    let bucket = agg.day_bucket(d);

    assert_eq!(bucket.by_address["x"], 7);
    assert!(bucket.by_status.is_empty());
}

#[test]
fn new_aggregates_are_empty() {
    let agg = Aggregates::new();

    assert!(agg.is_empty());
    assert_eq!(agg.total_bytes(), 0);
    assert!(agg.observed_days().is_empty());
    assert_consistent(&agg);
}
