use chrono::NaiveDate;

/// Facts extracted from one access log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub day: NaiveDate,
    pub address: String,
    pub status_code: String,
    /// `None` when the byte count field isn't a non-negative integer (e.g. `-`)
    pub byte_count: Option<u64>,
}
