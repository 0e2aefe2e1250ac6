use crate::access_log::{Aggregates, IngestSummary, ingest_reader};
use crate::cli::report::preflight;
use crate::conf::ReportConfig;
use crate::enrichment::geoip::{EnrichSummary, GeoLocator, MaxMindLocator, enrich};
use crate::error::{PreflightError, ReportError};
use crate::report::{ReportData, ReportMeta, render_report, write_assets, write_index};
use chrono::{SecondsFormat, Utc};
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub index: PathBuf,
    pub assets: Vec<PathBuf>,
    pub ingest: IngestSummary,
    pub total_hits: u64,
    pub total_bytes: u64,
    pub days: usize,
    pub places: usize,
    pub enrichment: EnrichSummary,
}

/// Generate a report using the MaxMind City database named in `config`.
pub fn run(config: &ReportConfig) -> Result<ReportSummary, ReportError> {
    preflight::check(&config.log_path, &config.output_dir)?;
    let locator = MaxMindLocator::open(&config.geoip.city_db)?;
    build(config, &locator)
}

/// Generate a report, resolving addresses with `locator`.
pub fn generate(
    config: &ReportConfig,
    locator: &dyn GeoLocator,
) -> Result<ReportSummary, ReportError> {
    preflight::check(&config.log_path, &config.output_dir)?;
    build(config, locator)
}

fn build(config: &ReportConfig, locator: &dyn GeoLocator) -> Result<ReportSummary, ReportError> {
    //--------------------------------------------------------------------------
    // Parse + aggregate (single forward pass)
    //--------------------------------------------------------------------------
    let file =
        File::open(&config.log_path).map_err(|e| ReportError::open_log(&config.log_path, e))?;

    let mut aggregates = Aggregates::new();
    let ingest = ingest_reader(BufReader::new(file), &mut aggregates)
        .map_err(|e| ReportError::read_log(&config.log_path, e))?;

    tracing::info!(
        lines = ingest.lines_read,
        skipped = ingest.lines_skipped,
        hits = aggregates.total_hits(),
        days = aggregates.observed_days().len(),
        "access log aggregated"
    );

    //--------------------------------------------------------------------------
    // Geo enrichment (once, over the final per-address totals)
    //--------------------------------------------------------------------------
    let places = enrich(aggregates.hits_by_address(), locator, &config.geo_filter());

    tracing::info!(
        addresses = aggregates.hits_by_address().len(),
        resolved = places.summary.resolved,
        places = places.hits_by_place.len(),
        "client addresses enriched"
    );

    //--------------------------------------------------------------------------
    // Render before touching the output directory, so a failed render leaves
    // nothing behind
    //--------------------------------------------------------------------------
    let meta = ReportMeta {
        source: config.log_path.display().to_string(),
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        lines_read: ingest.lines_read,
        lines_skipped: ingest.lines_skipped,
    };
    let html = render_report(&ReportData::new(&aggregates, &places, meta))?;

    create_output_dir(&config.output_dir)?;
    let assets = write_assets(&config.output_dir)?;
    let index = write_index(&config.output_dir, &html)?;

    tracing::info!(path = %index.display(), "report written");

    Ok(ReportSummary {
        index,
        assets,
        ingest,
        total_hits: aggregates.total_hits(),
        total_bytes: aggregates.total_bytes(),
        days: aggregates.observed_days().len(),
        places: places.hits_by_place.len(),
        enrichment: places.summary,
    })
}

/// Create the report directory itself with `create_dir`, so a directory that appeared
/// after preflight is still refused.
fn create_output_dir(dir: &Path) -> Result<(), ReportError> {
    if let Some(parent) = dir.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ReportError::create_output(parent, e))?;
    }

    fs::create_dir(dir).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => PreflightError::OutputExists {
            path: dir.to_path_buf(),
        }
        .into(),
        _ => ReportError::create_output(dir, e),
    })
}
