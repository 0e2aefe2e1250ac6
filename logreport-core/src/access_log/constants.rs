use chrono::NaiveDate;

/// Records with fewer space separated fields than this are skipped.
pub const MIN_FIELDS: usize = 12;

pub(crate) const ADDRESS_FIELD: usize = 0;
pub(crate) const TIMESTAMP_FIELD: usize = 3;
pub(crate) const STATUS_FIELD: usize = 8;
pub(crate) const BYTES_FIELD: usize = 9;

/// `10/Oct/2000:13:55:36`, the local time part of `$time_local`.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";

/// Day bucket used for records whose timestamp could not be parsed (1970-01-01).
pub fn unparsed_day() -> NaiveDate {
    NaiveDate::default()
}
