use crate::conf::error::ConfigError;
use crate::conf::types::{ConfigFile, ReportConfig};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Values given on the command line; `None` falls back to the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub log_path: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub geoip_db: Option<PathBuf>,
    pub country: Option<String>,
    pub locale: Option<String>,
}

pub fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))
}

/// Merge defaults, the optional config file and command line flags, in that order.
///
/// `now` names the output directory when none was given.
pub fn resolve_config(
    overrides: ConfigOverrides,
    now: DateTime<Utc>,
) -> Result<ReportConfig, ConfigError> {
    let file = match &overrides.config_file {
        Some(path) => load_config_file(path)?,
        None => ConfigFile::default(),
    };

    let mut geoip = file.geoip;
    if let Some(db) = overrides.geoip_db {
        geoip.city_db = db;
    }
    if let Some(country) = overrides.country {
        geoip.country = country;
    }
    if let Some(locale) = overrides.locale {
        geoip.locale = locale;
    }

    if geoip.country.trim().is_empty() {
        return Err(ConfigError::EmptyCountry);
    }
    if geoip.locale.trim().is_empty() {
        return Err(ConfigError::EmptyLocale);
    }

    let output_dir = overrides.output_dir.unwrap_or_else(|| {
        file.report
            .output_root
            .join(format!("report_{}", now.timestamp()))
    });

    Ok(ReportConfig {
        log_path: overrides.log_path,
        output_dir,
        geoip,
    })
}
