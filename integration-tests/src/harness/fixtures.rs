use logreport_core::conf::{GeoIpConfig, ReportConfig};
use logreport_core::enrichment::geoip::{GeoError, GeoLocator, GeoRecord};
use std::collections::BTreeMap;
use std::fs;
use std::net::IpAddr;
use std::path::PathBuf;
use tempfile::TempDir;

/// Combined log format record, as nginx writes it by default.
pub fn record(address: &str, timestamp: &str, status: &str, bytes: &str) -> String {
    format!(
        r#"{address} - - [{timestamp} +0800] "GET / HTTP/1.1" {status} {bytes} "-" "Mozilla/5.0""#
    )
}

/// A temp directory holding `access.log`, with `report/` as the (not yet created) output.
pub struct ReportFixture {
    dir: TempDir,
}

impl ReportFixture {
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dir = tempfile::tempdir().expect("failed to create temp dir");

        let mut log = String::new();
        for line in lines {
            log.push_str(line.as_ref());
            log.push('\n');
        }
        fs::write(dir.path().join("access.log"), log).expect("failed to write access.log");

        Self { dir }
    }

    pub fn config(&self) -> ReportConfig {
        ReportConfig {
            log_path: self.dir.path().join("access.log"),
            output_dir: self.output_dir(),
            geoip: GeoIpConfig::default(),
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("report")
    }

    pub fn index_html(&self) -> String {
        fs::read_to_string(self.output_dir().join("index.html")).expect("index.html missing")
    }
}

/// Locator over a fixed table; unknown addresses fail the lookup.
#[derive(Default)]
pub struct StaticLocator {
    records: BTreeMap<IpAddr, GeoRecord>,
}

impl StaticLocator {
    pub fn place(mut self, ip: &str, country: &str, city: &str, coordinates: (f64, f64)) -> Self {
        let names = |name: &str| BTreeMap::from([("zh-CN".to_string(), name.to_string())]);

        self.records.insert(
            ip.parse().expect("invalid ip in fixture"),
            GeoRecord {
                country_names: names(country),
                city_names: names(city),
                longitude: Some(coordinates.0),
                latitude: Some(coordinates.1),
            },
        );
        self
    }
}

impl GeoLocator for StaticLocator {
    fn locate(&self, ip: IpAddr) -> Result<GeoRecord, GeoError> {
        self.records
            .get(&ip)
            .cloned()
            .ok_or_else(|| GeoError::lookup(ip, "not in fixture table"))
    }
}
