use std::net::IpAddr;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("geoip lookup failed for {ip}: {source}")]
    Lookup {
        ip: IpAddr,
        #[source]
        source: BoxError,
    },

    #[error("failed to decode geoip record for {ip}: {source}")]
    Decode {
        ip: IpAddr,
        #[source]
        source: BoxError,
    },
}

impl GeoError {
    pub fn lookup(ip: IpAddr, source: impl Into<BoxError>) -> Self {
        Self::Lookup {
            ip,
            source: source.into(),
        }
    }

    pub fn decode(ip: IpAddr, source: impl Into<BoxError>) -> Self {
        Self::Decode {
            ip,
            source: source.into(),
        }
    }
}
