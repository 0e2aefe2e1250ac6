//! Access Log Processing Pipeline
//!
//! This module turns a web-server access log into running statistics.
//!
//! Lines are read one at a time from the input, split into fields and turned into a
//! [`LogEvent`]. Each event is then folded into an [`Aggregates`] value that keeps
//! totals for the whole log, per calendar day, per client address and per status code.
//!
//! Lines that don't look like an access log record (fewer than twelve space separated
//! fields) are skipped and never reach the aggregates. Fields that are present but fail
//! to parse degrade instead of failing the line:
//! - **Timestamp**: the line is still counted, under the [`unparsed_day`] bucket
//! - **Byte count**: the line is still counted, but adds nothing to the byte totals
//!
//! Only the aggregate state is kept in memory, never the log itself.
//!
//! The overall data processing architecture is:
//!
//! log file
//! ingest_reader
//! parse_line
//! LogEvent
//! Aggregates
//!

mod aggregate;
mod constants;
mod ingest;
mod parse;
mod types;

#[cfg(test)]
mod tests;

pub use aggregate::{Aggregates, Counts};
pub use constants::{MIN_FIELDS, TIMESTAMP_FORMAT, unparsed_day};
pub use ingest::{IngestSummary, ingest_reader};
pub use parse::parse_line;
pub use types::LogEvent;
