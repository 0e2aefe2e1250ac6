use crate::access_log::aggregate::Aggregates;
use crate::access_log::parse::parse_line;
use std::io::{self, BufRead};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub lines_read: u64,
    pub lines_skipped: u64,
}

impl IngestSummary {
    pub fn lines_counted(&self) -> u64 {
        self.lines_read - self.lines_skipped
    }
}

/// Fold every record of `reader` into `aggregates` in a single forward pass.
///
/// Lines are split on `\n` with a trailing `\r` dropped. Bytes that aren't valid UTF-8
/// are replaced rather than failing the whole run; only I/O errors are returned.
pub fn ingest_reader<R: BufRead>(
    mut reader: R,
    aggregates: &mut Aggregates,
) -> io::Result<IngestSummary> {
    let mut summary = IngestSummary::default();
    let mut buf = Vec::with_capacity(512);

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let mut raw = buf.as_slice();
        if let Some(rest) = raw.strip_suffix(b"\n") {
            raw = rest;
        }
        if let Some(rest) = raw.strip_suffix(b"\r") {
            raw = rest;
        }

        summary.lines_read += 1;
        let line = String::from_utf8_lossy(raw);

        match parse_line(&line) {
            Some(event) => aggregates.ingest(&event),
            None => {
                summary.lines_skipped += 1;
                tracing::trace!(line = summary.lines_read, "skipping malformed record");
            }
        }
    }

    Ok(summary)
}
