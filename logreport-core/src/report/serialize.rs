use serde::Serialize;

/// Returned when a value can't be encoded, so a template always gets a JSON token.
pub const EMPTY_OBJECT: &str = "{}";

/// Compact JSON for embedding aggregate data in the report.
///
/// `<`, `>` and `&` are written as `\u00XX` escapes so log content can't close the
/// surrounding `<script>` element.
pub fn to_json_text<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => escape_html(&json),
        Err(e) => {
            tracing::warn!(error = %e, "failed to encode report value");
            EMPTY_OBJECT.to_owned()
        }
    }
}

fn escape_html(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            c => out.push(c),
        }
    }
    out
}
