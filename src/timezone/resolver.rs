//! Wall-clock conversion between time zones.
//!
//! A source date and time are read as local time in the source zone; the
//! resulting instant is then shown in every target zone together with its
//! offset difference and calendar-day difference.

use super::catalog::names_at;
use crate::constants::{INVALID_DATETIME, LONG_DATE_FORMAT, SHORT_DATE_FORMAT, TIME_FORMAT};
use crate::utils::datetime::{self, format_hours};
use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, Offset, TimeZone, Timelike};
use chrono_tz::Tz;

/// Why a conversion could not be computed. The UI shows every variant as
/// [`INVALID_DATETIME`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimezoneError {
    #[error("Invalid date: '{0}'")]
    InvalidDate(String),

    #[error("Invalid time: '{0}'")]
    InvalidTime(String),

    #[error("Unknown time zone: '{0}'")]
    UnknownZone(String),

    #[error("Local time {0} does not exist in {1}")]
    NonexistentLocalTime(String, String),
}

/// One target zone's view of the source instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub zone: String,
    pub local: DateTime<Tz>,
    pub utc_offset_minutes: i32,
    /// Target offset minus source offset
    pub offset_delta_minutes: i32,
    /// Target local calendar date minus source local calendar date
    pub day_delta: i64,
    pub abbreviation: String,
    pub long_name: String,
}

impl ConversionResult {
    pub fn offset_delta_hours(&self) -> f64 {
        f64::from(self.offset_delta_minutes) / 60.0
    }

    pub fn time_label(&self) -> String {
        self.local.format(TIME_FORMAT).to_string()
    }

    pub fn date_label(&self) -> String {
        self.local.format(SHORT_DATE_FORMAT).to_string()
    }
}

/// Parse an IANA identifier.
pub fn parse_zone(zone: &str) -> Result<Tz, TimezoneError> {
    zone.parse::<Tz>()
        .map_err(|_| TimezoneError::UnknownZone(zone.to_string()))
}

/// Interpret `date` (YYYY-MM-DD) and `time` (HH:MM) as wall-clock time in
/// `zone`.
///
/// Ambiguous times during a fall-back transition resolve to the earlier
/// instant. Times skipped by a spring-forward transition move forward by an
/// hour.
pub fn source_instant(zone: &str, date: &str, time: &str) -> Result<DateTime<Tz>, TimezoneError> {
    let tz = parse_zone(zone)?;
    let date = datetime::parse_date(date).map_err(|_| TimezoneError::InvalidDate(date.to_string()))?;
    let time = datetime::parse_time(time).map_err(|_| TimezoneError::InvalidTime(time.to_string()))?;
    let naive = NaiveDateTime::new(date, time);

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .ok_or_else(|| TimezoneError::NonexistentLocalTime(naive.to_string(), zone.to_string())),
    }
}

/// Show `source` in `target`.
pub fn convert_instant(source: &DateTime<Tz>, target: Tz) -> ConversionResult {
    let local = source.with_timezone(&target);
    let source_offset = source.offset().fix().local_minus_utc() / 60;
    let target_offset = local.offset().fix().local_minus_utc() / 60;
    let day_delta = (local.date_naive() - source.date_naive()).num_days();
    let (abbreviation, long_name) = names_at(target, source);

    ConversionResult {
        zone: target.name().to_string(),
        local,
        utc_offset_minutes: target_offset,
        offset_delta_minutes: target_offset - source_offset,
        day_delta,
        abbreviation,
        long_name,
    }
}

/// Convert a wall-clock time in `source_zone` to each of `target_zones`, in
/// order.
pub fn resolve<S: AsRef<str>>(
    source_zone: &str,
    source_date: &str,
    source_time: &str,
    target_zones: &[S],
) -> Result<Vec<ConversionResult>, TimezoneError> {
    let source = source_instant(source_zone, source_date, source_time)?;
    target_zones
        .iter()
        .map(|zone| parse_zone(zone.as_ref()).map(|tz| convert_instant(&source, tz)))
        .collect()
}

/// `+9.5 hrs`, `-5 hrs`, `0 hrs`
pub fn format_offset_delta(offset_delta_minutes: i32) -> String {
    let hours = f64::from(offset_delta_minutes) / 60.0;
    let sign = if offset_delta_minutes > 0 { "+" } else { "" };
    format!("{}{} hrs", sign, format_hours(hours))
}

/// `+1 DAY`, `-1 DAY`, or empty when the calendar date is the same.
pub fn format_day_delta(day_delta: i64) -> String {
    match day_delta {
        0 => String::new(),
        d if d > 0 => format!("+{} DAY", d),
        d => format!("{} DAY", d),
    }
}

/// Shift a YYYY-MM-DD date by whole days. Returns `None` if the date does not
/// parse.
pub fn adjust_date(date: &str, days: i64) -> Option<String> {
    let parsed = datetime::parse_date(date).ok()?;
    parsed
        .checked_add_signed(Duration::days(days))
        .map(datetime::format_ymd)
}

/// Shift an HH:MM time, wrapping around midnight without touching the date.
pub fn adjust_time(time: &str, hours: i64, minutes: i64) -> Option<String> {
    let parsed = datetime::parse_time(time).ok()?;
    let (shifted, _) = parsed.overflowing_add_signed(Duration::hours(hours) + Duration::minutes(minutes));
    Some(datetime::format_hm(shifted))
}

/// Replace the minute of an HH:MM time. Minutes outside 0..=59 are rejected.
pub fn set_minute(time: &str, minute: u32) -> Option<String> {
    let parsed = datetime::parse_time(time).ok()?;
    let updated: NaiveTime = parsed.with_minute(minute)?;
    Some(datetime::format_hm(updated))
}

/// Target zones in the order they were added, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetZones {
    zones: Vec<String>,
}

impl TargetZones {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_zones<I, S>(zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut targets = Self::new();
        for zone in zones {
            targets.add(zone);
        }
        targets
    }

    /// Append a zone. Returns `false` and leaves the list untouched if it is
    /// already present.
    pub fn add(&mut self, zone: impl Into<String>) -> bool {
        let zone = zone.into();
        if self.contains(&zone) {
            return false;
        }
        self.zones.push(zone);
        true
    }

    pub fn remove(&mut self, zone: &str) -> bool {
        let before = self.zones.len();
        self.zones.retain(|z| z != zone);
        self.zones.len() != before
    }

    pub fn contains(&self, zone: &str) -> bool {
        self.zones.iter().any(|z| z == zone)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.zones.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// Inputs of the timezone tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneState {
    pub source_zone: String,
    pub source_date: String,
    pub source_time: String,
    pub targets: TargetZones,
}

impl TimezoneState {
    pub fn new(source_zone: impl Into<String>, targets: TargetZones, source_date: String, source_time: String) -> Self {
        Self {
            source_zone: source_zone.into(),
            source_date,
            source_time,
            targets,
        }
    }

    /// Start at the current local date and time.
    pub fn starting_now(source_zone: impl Into<String>, targets: TargetZones) -> Self {
        Self::new(
            source_zone,
            targets,
            datetime::format_today(),
            datetime::format_now_hm(),
        )
    }

    /// Move the source date and time back to the current local clock.
    pub fn reset_to_now(&mut self) {
        self.source_date = datetime::format_today();
        self.source_time = datetime::format_now_hm();
    }

    pub fn set_source_zone(&mut self, zone: impl Into<String>) {
        self.source_zone = zone.into();
    }

    pub fn add_target(&mut self, zone: impl Into<String>) -> bool {
        self.targets.add(zone)
    }

    pub fn remove_target(&mut self, zone: &str) -> bool {
        self.targets.remove(zone)
    }

    /// Invalid dates are left as they are.
    pub fn adjust_date(&mut self, days: i64) {
        if let Some(date) = adjust_date(&self.source_date, days) {
            self.source_date = date;
        }
    }

    pub fn adjust_time(&mut self, hours: i64, minutes: i64) {
        if let Some(time) = adjust_time(&self.source_time, hours, minutes) {
            self.source_time = time;
        }
    }

    pub fn set_minute(&mut self, minute: u32) -> bool {
        match set_minute(&self.source_time, minute) {
            Some(time) => {
                self.source_time = time;
                true
            }
            None => false,
        }
    }

    pub fn source_instant(&self) -> Result<DateTime<Tz>, TimezoneError> {
        source_instant(&self.source_zone, &self.source_date, &self.source_time)
    }

    pub fn resolve(&self) -> Result<Vec<ConversionResult>, TimezoneError> {
        resolve(
            &self.source_zone,
            &self.source_date,
            &self.source_time,
            self.targets.as_slice(),
        )
    }

    /// `(HH:MM, "Weekday, d Mon YYYY")` for the source card.
    pub fn source_labels(&self) -> (String, String) {
        match self.source_instant() {
            Ok(dt) => (
                dt.format(TIME_FORMAT).to_string(),
                dt.format(LONG_DATE_FORMAT).to_string(),
            ),
            Err(_) => (INVALID_DATETIME.to_string(), INVALID_DATETIME.to_string()),
        }
    }
}
