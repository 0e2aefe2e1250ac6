//! `logreport` pipeline: preflight, ingest, enrich, render.

mod preflight;
mod run;
mod summary;


pub use preflight::check;
pub use run::{ReportSummary, generate, run};
pub use summary::print_summary;
