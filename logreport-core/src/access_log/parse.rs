use crate::access_log::constants::{
    ADDRESS_FIELD, BYTES_FIELD, MIN_FIELDS, STATUS_FIELD, TIMESTAMP_FIELD, TIMESTAMP_FORMAT,
    unparsed_day,
};
use crate::access_log::types::LogEvent;
use chrono::{NaiveDate, NaiveDateTime};

/// Parse one access log record.
///
/// The record is split on single spaces, so a field containing spaces shifts every field
/// after it. Returns `None` for records with fewer than [`MIN_FIELDS`] fields.
pub fn parse_line(line: &str) -> Option<LogEvent> {
    let fields: Vec<&str> = line.split(' ').collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    Some(LogEvent {
        day: parse_day(fields[TIMESTAMP_FIELD]).unwrap_or_else(unparsed_day),
        address: fields[ADDRESS_FIELD].to_string(),
        status_code: fields[STATUS_FIELD].to_string(),
        byte_count: fields[BYTES_FIELD].parse::<u64>().ok(),
    })
}

/// `[10/Oct/2000:13:55:36` -> 2000-10-10
///
/// The zone lives in the next field and is ignored, so the day is the one the server
/// wrote, not a UTC day.
fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.strip_prefix('[').unwrap_or(raw);
    // Only present when the record has no zone field
    let raw = raw.strip_suffix(']').unwrap_or(raw);

    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .ok()
        .map(|ts| ts.date())
}
