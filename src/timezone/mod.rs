//! Timezone conversion and search.
//!
//! - [`catalog`] - the process-wide list of supported zones with display names
//! - [`aliases`] - colloquial abbreviations mapped to canonical zones
//! - [`search`] - free-text filtering of the catalog
//! - [`resolver`] - converting a wall-clock time in one zone to many others

pub mod aliases;
pub mod catalog;
pub mod resolver;
pub mod search;

pub use catalog::{all_timezones, city_name, TimeZoneEntry};
pub use resolver::{resolve, ConversionResult, TargetZones, TimezoneError, TimezoneState};
pub use search::search;
