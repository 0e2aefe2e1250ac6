use crate::enrichment::geoip::{DEFAULT_COUNTRY, DEFAULT_LOCALE, GeoFilter};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_CITY_DB: &str = "db/GeoLite2-City.mmdb";
pub const DEFAULT_OUTPUT_ROOT: &str = "reports";

/// Optional `logreport.hcl`.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub geoip: GeoIpConfig,

    #[serde(default)]
    pub report: ReportSection,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeoIpConfig {
    /// GeoLite2 / GeoIP2 City database
    #[serde(default = "default_city_db")]
    pub city_db: PathBuf,

    /// Only addresses in this country (named in `locale`) are kept
    #[serde(default = "default_country")]
    pub country: String,

    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for GeoIpConfig {
    fn default() -> Self {
        Self {
            city_db: default_city_db(),
            country: default_country(),
            locale: default_locale(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    /// Parent of generated `report_<unix-seconds>` directories
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
        }
    }
}

fn default_city_db() -> PathBuf {
    PathBuf::from(DEFAULT_CITY_DB)
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_owned()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_owned()
}

fn default_output_root() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_ROOT)
}

/// Settings for one report run, after defaults, config file and flags are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub log_path: PathBuf,
    pub output_dir: PathBuf,
    pub geoip: GeoIpConfig,
}

impl ReportConfig {
    pub fn geo_filter(&self) -> GeoFilter {
        GeoFilter {
            country: self.geoip.country.clone(),
            locale: self.geoip.locale.clone(),
        }
    }
}
