//! Utility modules for Convertist.
//!
//! - [`datetime`] - Date, time and UTC-offset parsing and formatting helpers

pub mod datetime;
