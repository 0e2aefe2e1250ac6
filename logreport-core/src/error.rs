use std::path::PathBuf;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Checks that run before any log line is read.
#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("log path {path} does not exist")]
    LogNotFound { path: PathBuf },

    #[error("log path {path} must be a file, not a directory")]
    LogIsDirectory { path: PathBuf },

    #[error("log path {path} is not a regular file")]
    LogNotAFile { path: PathBuf },

    #[error("cannot inspect log path {path}: {source}")]
    LogUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output directory {path} already exists")]
    OutputExists { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Preflight(#[from] PreflightError),

    // Input
    #[error("failed to open log {path}: {source}")]
    OpenLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log {path}: {source}")]
    ReadLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open geoip database {path}: {source}")]
    OpenGeoDb {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    // Output
    #[error("failed to create {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing embedded report asset: {name}")]
    MissingAsset { name: String },

    #[error("failed to render report template")]
    Template(#[from] tera::Error),
}

impl ReportError {
    pub fn open_log(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenLog {
            path: path.into(),
            source,
        }
    }

    pub fn read_log(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadLog {
            path: path.into(),
            source,
        }
    }

    pub fn open_geo_db(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        Self::OpenGeoDb {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn create_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateOutput {
            path: path.into(),
            source,
        }
    }

    pub fn write_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteOutput {
            path: path.into(),
            source,
        }
    }
}
