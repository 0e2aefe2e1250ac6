mod error;
mod loader;
pub mod types;


pub use error::ConfigError;
pub use loader::{ConfigOverrides, load_config_file, resolve_config};
pub use types::{ConfigFile, GeoIpConfig, ReportConfig, ReportSection};
