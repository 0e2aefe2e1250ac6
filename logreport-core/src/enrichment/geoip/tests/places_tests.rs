use super::FakeLocator;
use crate::access_log::Counts;
use crate::enrichment::geoip::{EnrichSummary, GeoFilter, enrich};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn counts(entries: &[(&str, u64)]) -> Counts {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn locator() -> FakeLocator {
    FakeLocator::default()
        .with("1.0.1.1", "中国", "福州", 119.3, 26.06)
        .with("1.0.1.2", "中国", "福州", 119.9, 26.9)
        .with("1.0.8.1", "中国", "广州", 113.25, 23.12)
        .with("8.8.8.8", "美国", "", -97.82, 37.75)
}

#[test]
fn enrich_aggregates_hits_per_place() {
    // Arrange
    let hits = counts(&[("1.0.1.1", 3), ("1.0.1.2", 4), ("1.0.8.1", 1)]);

    // Act
    let places = enrich(&hits, &locator(), &GeoFilter::default());

    // Assert
    assert_eq!(
        places.hits_by_place,
        BTreeMap::from([("中国福州".to_string(), 7), ("中国广州".to_string(), 1)])
    );
    assert_eq!(places.summary.resolved, 3);
}

#[test]
fn enrich_first_address_fixes_place_location() {
    // Arrange
    let hits = counts(&[("1.0.1.2", 1), ("1.0.1.1", 1)]);

    // Act
    let places = enrich(&hits, &locator(), &GeoFilter::default());

    // Assert: 1.0.1.1 sorts first, so its coordinate wins
    assert_eq!(places.location_by_place["中国福州"], (119.3, 26.06));
}

#[test]
fn enrich_excludes_other_countries_regardless_of_hits() {
    // Arrange
    let hits = counts(&[("8.8.8.8", 1_000_000), ("1.0.8.1", 1)]);

    // Act
    let places = enrich(&hits, &locator(), &GeoFilter::default());

    // Assert
    assert_eq!(places.hits_by_place.len(), 1);
    assert!(!places.hits_by_place.keys().any(|k| k.starts_with("美国")));
    assert!(!places.location_by_place.keys().any(|k| k.starts_with("美国")));
    assert_eq!(places.summary.other_country, 1);
}

#[test]
fn enrich_skips_invalid_and_unknown_addresses() {
    // Arrange
    let hits = counts(&[("-", 5), ("not-an-ip", 2), ("9.9.9.9", 3), ("1.0.8.1", 1)]);

    // Act
    let places = enrich(&hits, &locator(), &GeoFilter::default());

    // Assert
    assert_eq!(
        places.summary,
        EnrichSummary {
            resolved: 1,
            invalid_address: 2,
            lookup_failed: 1,
            other_country: 0,
        }
    );
    assert_eq!(places.hits_by_place["中国广州"], 1);
}

#[test]
fn enrich_is_idempotent() {
    let hits = counts(&[("1.0.1.1", 3), ("1.0.1.2", 4), ("8.8.8.8", 1)]);
    let locator = locator();
    let filter = GeoFilter::default();

    let first = enrich(&hits, &locator, &filter);
    let second = enrich(&hits, &locator, &filter);

    assert_eq!(first, second);
}

#[test]
fn enrich_honors_configured_country() {
    // Arrange
    let hits = counts(&[("8.8.8.8", 2), ("1.0.8.1", 1)]);
    let filter = GeoFilter {
        country: "美国".into(),
        locale: "zh-CN".into(),
    };

    // Act
    let places = enrich(&hits, &locator(), &filter);

    // Assert: a missing city name leaves just the country
    assert_eq!(
        places.hits_by_place,
        BTreeMap::from([("美国".to_string(), 2)])
    );
    assert_eq!(places.location_by_place["美国"], (-97.82, 37.75));
}

#[test]
fn enrich_empty_input() {
    let places = enrich(&Counts::new(), &locator(), &GeoFilter::default());

    assert!(places.hits_by_place.is_empty());
    assert!(places.location_by_place.is_empty());
}
