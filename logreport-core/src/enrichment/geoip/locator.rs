use crate::enrichment::geoip::error::GeoError;
use std::collections::BTreeMap;
use std::net::IpAddr;

pub const DEFAULT_COUNTRY: &str = "中国";
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// Resolves an address to a location record.
pub trait GeoLocator {
    fn locate(&self, ip: IpAddr) -> Result<GeoRecord, GeoError>;
}

/// What enrichment needs from a City database record.
///
/// Names are keyed by locale (`en`, `zh-CN`, ...). An address the database doesn't know
/// about is an empty record, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoRecord {
    pub country_names: BTreeMap<String, String>,
    pub city_names: BTreeMap<String, String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

impl GeoRecord {
    pub fn country_name(&self, locale: &str) -> &str {
        self.country_names.get(locale).map_or("", String::as_str)
    }

    pub fn city_name(&self, locale: &str) -> &str {
        self.city_names.get(locale).map_or("", String::as_str)
    }

    /// `(longitude, latitude)`, missing coordinates read as 0.0
    pub fn coordinates(&self) -> (f64, f64) {
        (
            self.longitude.unwrap_or_default(),
            self.latitude.unwrap_or_default(),
        )
    }
}

/// Which addresses survive enrichment, and which locale names are read in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoFilter {
    pub country: String,
    pub locale: String,
}

impl Default for GeoFilter {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_owned(),
            locale: DEFAULT_LOCALE.to_owned(),
        }
    }
}

impl GeoFilter {
    pub fn matches(&self, record: &GeoRecord) -> bool {
        record.country_name(&self.locale) == self.country
    }

    /// Country and city name, concatenated.
    pub fn place_name(&self, record: &GeoRecord) -> String {
        format!(
            "{}{}",
            record.country_name(&self.locale),
            record.city_name(&self.locale)
        )
    }
}
