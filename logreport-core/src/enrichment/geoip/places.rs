use crate::access_log::Counts;
use crate::enrichment::geoip::locator::{GeoFilter, GeoLocator};
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::net::IpAddr;

/// Hits re-counted per place, with one coordinate per place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlaceStats {
    pub hits_by_place: BTreeMap<String, u64>,
    /// `(longitude, latitude)` of the first address that resolved to the place
    pub location_by_place: BTreeMap<String, (f64, f64)>,
    #[serde(skip)]
    pub summary: EnrichSummary,
}

/// How many addresses ended up where.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichSummary {
    pub resolved: u64,
    pub invalid_address: u64,
    pub lookup_failed: u64,
    pub other_country: u64,
}

/// Resolve every address in `hits_by_address` and aggregate the hits per place.
///
/// Addresses that fail to parse or resolve are logged and left out; a single failure
/// never aborts the batch. Addresses are visited in map order, so for a place reached
/// from several addresses the lexicographically smallest one fixes the coordinate.
pub fn enrich(
    hits_by_address: &Counts,
    locator: &dyn GeoLocator,
    filter: &GeoFilter,
) -> PlaceStats {
    let mut stats = PlaceStats::default();

    for (address, hits) in hits_by_address {
        let Ok(ip) = address.parse::<IpAddr>() else {
            tracing::warn!(%address, "client address is not an ip address");
            stats.summary.invalid_address += 1;
            continue;
        };

        let record = match locator.locate(ip) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(%address, error = %e, "geoip lookup failed");
                stats.summary.lookup_failed += 1;
                continue;
            }
        };

        if !filter.matches(&record) {
            tracing::debug!(
                %address,
                country = record.country_name(&filter.locale),
                "address outside target country"
            );
            stats.summary.other_country += 1;
            continue;
        }

        let place = filter.place_name(&record);
        stats.summary.resolved += 1;

        *stats.hits_by_place.entry(place.clone()).or_insert(0) += hits;
        if let Entry::Vacant(slot) = stats.location_by_place.entry(place) {
            slot.insert(record.coordinates());
        }
    }

    stats
}
