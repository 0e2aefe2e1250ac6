//! GeoIP enrichment of client addresses.
//!
//! Runs once, after the whole log has been aggregated, over the per-address totals.
//! Every address is resolved to a country and city through a [`GeoLocator`], addresses
//! outside the target country are dropped, and the remaining hits are re-counted per
//! place (country name followed by city name).

mod error;
mod locator;
mod maxmind;
mod places;

#[cfg(test)]
mod tests;

pub use error::GeoError;
pub use locator::{DEFAULT_COUNTRY, DEFAULT_LOCALE, GeoFilter, GeoLocator, GeoRecord};
pub use maxmind::MaxMindLocator;
pub use places::{EnrichSummary, PlaceStats, enrich};
