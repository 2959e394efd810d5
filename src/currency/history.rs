//! Rate history windows and chart normalization.

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Span of the trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1D")]
    OneDay,
    #[default]
    #[serde(rename = "5D")]
    FiveDays,
    #[serde(rename = "6M")]
    SixMonths,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::OneDay, TimeRange::FiveDays, TimeRange::SixMonths];

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::OneDay => "1D",
            TimeRange::FiveDays => "5D",
            TimeRange::SixMonths => "6M",
        }
    }

    pub fn next(self) -> Self {
        match self {
            TimeRange::OneDay => TimeRange::FiveDays,
            TimeRange::FiveDays => TimeRange::SixMonths,
            TimeRange::SixMonths => TimeRange::OneDay,
        }
    }

    /// Inclusive `(start, end)` calendar window ending at `today`.
    pub fn date_window(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = match self {
            TimeRange::OneDay => today - Duration::days(1),
            TimeRange::FiveDays => today - Duration::days(5),
            // Clamps to the last day of the month, so Aug 31 → Feb 28/29
            TimeRange::SixMonths => today.checked_sub_months(Months::new(6)).unwrap_or(today),
        };
        (start, today)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1D" => Ok(TimeRange::OneDay),
            "5D" => Ok(TimeRange::FiveDays),
            "6M" => Ok(TimeRange::SixMonths),
            other => Err(format!("unknown time range '{}' (expected 1D, 5D or 6M)", other)),
        }
    }
}

/// One day's closing rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateHistoryPoint {
    pub date: NaiveDate,
    pub rate: f64,
}

/// A point in a 0–100 plot area where y grows downward, as on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Lowest and highest rate in the window.
pub fn rate_bounds(history: &[RateHistoryPoint]) -> Option<(f64, f64)> {
    history.iter().map(|p| p.rate).fold(None, |acc, rate| match acc {
        None => Some((rate, rate)),
        Some((min, max)) => Some((min.min(rate), max.max(rate))),
    })
}

/// Normalize a history for plotting. `x` spreads the points evenly from 0 to
/// 100; `y` maps the lowest rate to 100 (bottom) and the highest to 0 (top).
/// Fewer than two points cannot form a curve and yield nothing.
pub fn chart_points(history: &[RateHistoryPoint]) -> Vec<ChartPoint> {
    if history.len() < 2 {
        return Vec::new();
    }
    let Some((min, max)) = rate_bounds(history) else {
        return Vec::new();
    };
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    let last = (history.len() - 1) as f64;

    history
        .iter()
        .enumerate()
        .map(|(i, point)| ChartPoint {
            x: i as f64 / last * 100.0,
            y: 100.0 - (point.rate - min) / range * 100.0,
        })
        .collect()
}
