use crate::error::ReportError;
use crate::report::data::ReportData;
use crate::report::ranking::{RankDirection, rank};
use crate::report::serialize::to_json_text;
use rust_embed::RustEmbed;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tera::{Context, Tera, Value};

#[derive(RustEmbed)]
#[folder = "report-templates/"]
pub struct ReportTemplates;

pub const INDEX_TEMPLATE: &str = "index.html";

/// Render the report page to a string.
pub fn render_report(data: &ReportData<'_>) -> Result<String, ReportError> {
    let tera = engine()?;
    let context = Context::from_serialize(data)?;
    Ok(tera.render(INDEX_TEMPLATE, &context)?)
}

/// Render `index.html` into `dir`, which must already exist.
pub fn write_report(dir: &Path, data: &ReportData<'_>) -> Result<PathBuf, ReportError> {
    let html = render_report(data)?;
    write_index(dir, &html)
}

/// Write an already rendered page as `dir/index.html`.
pub fn write_index(dir: &Path, html: &str) -> Result<PathBuf, ReportError> {
    let path = dir.join(INDEX_TEMPLATE);

    let file = fs::File::create(&path).map_err(|e| ReportError::create_output(&path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(html.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| ReportError::write_output(&path, e))?;

    Ok(path)
}

/// Copy every embedded static asset (anything but the page template) into `dir`.
pub fn write_assets(dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let mut written = Vec::new();

    for name in ReportTemplates::iter().filter(|name| &**name != INDEX_TEMPLATE) {
        let file = ReportTemplates::get(&name).ok_or_else(|| ReportError::MissingAsset {
            name: name.to_string(),
        })?;

        let path = dir.join(&*name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ReportError::create_output(parent, e))?;
        }
        fs::write(&path, file.data.as_ref()).map_err(|e| ReportError::write_output(&path, e))?;
        written.push(path);
    }

    Ok(written)
}

fn engine() -> Result<Tera, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(INDEX_TEMPLATE, &template(INDEX_TEMPLATE)?)?;
    tera.register_filter("sortmap", sortmap_filter);
    tera.register_filter("json", json_filter);
    Ok(tera)
}

/// Fetch an embedded template as UTF-8 text
fn template(name: &str) -> Result<String, ReportError> {
    let file = ReportTemplates::get(name).ok_or_else(|| ReportError::MissingAsset {
        name: name.to_owned(),
    })?;

    String::from_utf8(file.data.into_owned())
        .map_err(|e| tera::Error::msg(format!("template {name} is not valid UTF-8: {e}")).into())
}

/// `{{ visitors_total | sortmap(order="desc") }}`
fn sortmap_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let object = value
        .as_object()
        .ok_or_else(|| tera::Error::msg("sortmap expects a map of counts"))?;

    let counts = object
        .iter()
        .map(|(key, count)| {
            count
                .as_u64()
                .map(|n| (key.clone(), n))
                .ok_or_else(|| tera::Error::msg(format!("sortmap: `{key}` is not a count")))
        })
        .collect::<tera::Result<BTreeMap<String, u64>>>()?;

    let direction = RankDirection::from_flag(args.get("order").and_then(Value::as_str));
    Ok(tera::to_value(rank(&counts, direction))?)
}

/// `{{ region_location | json | safe }}`
fn json_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(to_json_text(value)))
}
