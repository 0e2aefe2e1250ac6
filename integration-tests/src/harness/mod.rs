mod fixtures;
pub mod tracing;

pub use fixtures::{ReportFixture, StaticLocator, record};
pub use tracing::{CapturedEvent, captured_events};
