mod aggregate_tests;

/// Combined log format record with twelve space separated fields.
pub(super) fn record(address: &str, timestamp: &str, status: &str, bytes: &str) -> String {
    format!(
        r#"{address} - - [{timestamp} +0800] "GET /index.html HTTP/1.1" {status} {bytes} "-" "curl/8.5.0""#
    )
}
