//! Report rendering.
//!
//! The aggregates and place statistics are snapshotted into a [`ReportData`] and rendered
//! through the embedded `index.html` template. Templates can call two helpers:
//! - `sortmap(order="desc")`: a count map as `[{key, value}]`, see [`rank`]
//! - `json`: compact JSON of any value, see [`to_json_text`]
//!
//! Byte counts go through tera's builtin `filesizeformat`.

mod data;
mod ranking;
mod render;
mod serialize;


pub use data::{DailyRow, ReportData, ReportMeta};
pub use ranking::{RankDirection, RankedEntry, rank};
pub use render::{
    INDEX_TEMPLATE, ReportTemplates, render_report, write_assets, write_index, write_report,
};
pub use serialize::{EMPTY_OBJECT, to_json_text};
