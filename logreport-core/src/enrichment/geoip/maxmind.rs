use crate::enrichment::geoip::error::GeoError;
use crate::enrichment::geoip::locator::{GeoLocator, GeoRecord};
use crate::error::ReportError;
use maxminddb::PathElement;
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::path::Path;

/// [`GeoLocator`] backed by a GeoLite2 / GeoIP2 City database.
pub struct MaxMindLocator {
    reader: maxminddb::Reader<maxminddb::Mmap>,
}

impl MaxMindLocator {
    pub fn open(path: &Path) -> Result<Self, ReportError> {
        // Safety note on the memory-mapped database...
        // - File is opened read-only
        // - Lifetime is bound to MaxMindLocator
        // - The mmdb file is not modified while a report runs
        let reader = unsafe { maxminddb::Reader::open_mmap(path) }
            .map_err(|e| ReportError::open_geo_db(path, e))?;

        tracing::info!(path = %path.display(), "opened geoip database");
        Ok(Self { reader })
    }
}

impl GeoLocator for MaxMindLocator {
    fn locate(&self, ip: IpAddr) -> Result<GeoRecord, GeoError> {
        let lookup = self
            .reader
            .lookup(ip)
            .map_err(|e| GeoError::lookup(ip, e))?;

        //-----------------------------------------------------------------
        // Localized names
        //-----------------------------------------------------------------
        let country_names = lookup
            .decode_path::<BTreeMap<String, String>>(&[
                PathElement::Key("country"),
                PathElement::Key("names"),
            ])
            .map_err(|e| GeoError::decode(ip, e))?
            .unwrap_or_default();

        let city_names = lookup
            .decode_path::<BTreeMap<String, String>>(&[
                PathElement::Key("city"),
                PathElement::Key("names"),
            ])
            .map_err(|e| GeoError::decode(ip, e))?
            .unwrap_or_default();

        //-----------------------------------------------------------------
        // Coordinates
        //-----------------------------------------------------------------
        let longitude = lookup
            .decode_path::<f64>(&[PathElement::Key("location"), PathElement::Key("longitude")])
            .map_err(|e| GeoError::decode(ip, e))?;

        let latitude = lookup
            .decode_path::<f64>(&[PathElement::Key("location"), PathElement::Key("latitude")])
            .map_err(|e| GeoError::decode(ip, e))?;

        Ok(GeoRecord {
            country_names,
            city_names,
            longitude,
            latitude,
        })
    }
}
