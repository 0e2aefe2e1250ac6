mod places_tests;

use crate::enrichment::geoip::{GeoError, GeoLocator, GeoRecord};
use std::collections::BTreeMap;
use std::net::IpAddr;

/// In-memory locator; unknown addresses fail the lookup.
#[derive(Default)]
pub(super) struct FakeLocator {
    records: BTreeMap<IpAddr, GeoRecord>,
}

impl FakeLocator {
    pub(super) fn with(mut self, ip: &str, country: &str, city: &str, lon: f64, lat: f64) -> Self {
        self.records.insert(
            ip.parse().unwrap(),
            GeoRecord {
                country_names: BTreeMap::from([("zh-CN".to_string(), country.to_string())]),
                city_names: BTreeMap::from([("zh-CN".to_string(), city.to_string())]),
                longitude: Some(lon),
                latitude: Some(lat),
            },
        );
        self
    }
}

impl GeoLocator for FakeLocator {
    fn locate(&self, ip: IpAddr) -> Result<GeoRecord, GeoError> {
        self.records
            .get(&ip)
            .cloned()
            .ok_or_else(|| GeoError::lookup(ip, "address not in test database"))
    }
}
